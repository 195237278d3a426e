//! Placement tool trait and registry.

use std::collections::BTreeMap;

use crate::placement::{DragArea, ExtrusionHandles};
use crate::scene::{ObjectId, SceneHost};

/// Unique identifier for a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolId(pub &'static str);

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
}

/// Everything a tool may touch during one frame.
pub struct ViewContext<'a> {
    pub scene: &'a mut dyn SceneHost,
    pub extrusion: &'a mut dyn ExtrusionHandles,
    pub modifiers: Modifiers,
}

impl<'a> ViewContext<'a> {
    pub fn new(scene: &'a mut dyn SceneHost, extrusion: &'a mut dyn ExtrusionHandles) -> Self {
        Self {
            scene,
            extrusion,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// What a frame did to the tool's provisional generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Nothing changed this frame
    Idle,
    Created(ObjectId),
    Updated(ObjectId),
    /// The shape collapsed and the generator was removed
    Destroyed(ObjectId),
    Committed(ObjectId),
    /// The drag was aborted, removing the generator if there was one
    Cancelled(Option<ObjectId>),
}

impl PlacementOutcome {
    /// Generator that is still provisional after this frame.
    pub fn live_object(&self) -> Option<ObjectId> {
        match *self {
            PlacementOutcome::Created(id) | PlacementOutcome::Updated(id) => Some(id),
            _ => None,
        }
    }
}

/// A tool that places generators by dragging in the scene view.
pub trait PlacementTool {
    fn id(&self) -> ToolId;

    /// Display name; also used to name created objects.
    fn name(&self) -> &str {
        self.id().0
    }

    /// Menu group the tool is listed under.
    fn group(&self) -> &str;

    /// Keyboard shortcut (e.g., "B").
    fn shortcut(&self) -> Option<&str> {
        None
    }

    /// Called when tool becomes active.
    fn on_activate(&mut self, _scene: &mut dyn SceneHost) {}

    /// Called when tool becomes inactive. Any provisional generator is
    /// discarded.
    fn on_deactivate(&mut self, scene: &mut dyn SceneHost);

    /// Run one frame of the drag.
    fn on_interact(&mut self, ctx: &mut ViewContext<'_>, drag_area: DragArea) -> PlacementOutcome;

    /// Provisional generator owned by the tool, if any.
    fn live_object(&self) -> Option<ObjectId>;
}

/// Registry for managing placement tools.
pub struct ToolRegistry {
    tools: BTreeMap<ToolId, Box<dyn PlacementTool>>,
    active_tool: Option<ToolId>,
    previous_tool: Option<ToolId>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: BTreeMap::new(),
            active_tool: None,
            previous_tool: None,
        }
    }

    /// Register a tool. The first registered tool becomes active.
    pub fn register(&mut self, tool: Box<dyn PlacementTool>) {
        let id = tool.id();
        if self.active_tool.is_none() {
            self.active_tool = Some(id);
        }
        if self.tools.insert(id, tool).is_some() {
            log::warn!("Replaced placement tool {}", id);
        }
    }

    /// Get the active tool.
    pub fn active(&self) -> Option<&dyn PlacementTool> {
        self.active_tool.and_then(|id| self.get(id))
    }

    /// Get the active tool ID.
    pub fn active_id(&self) -> Option<ToolId> {
        self.active_tool
    }

    /// Get a tool by ID.
    pub fn get(&self, id: ToolId) -> Option<&dyn PlacementTool> {
        self.tools.get(&id).map(|t| t.as_ref())
    }

    /// Switch to a tool by ID.
    ///
    /// The outgoing tool is deactivated first so its provisional generator
    /// never outlives it. Unknown ids leave the current tool active.
    pub fn switch_to(&mut self, id: ToolId, scene: &mut dyn SceneHost) -> bool {
        if !self.tools.contains_key(&id) {
            log::warn!("Unknown placement tool {}", id);
            return false;
        }
        if self.active_tool == Some(id) {
            return true;
        }

        if let Some(current_id) = self.active_tool {
            if let Some(tool) = self.tools.get_mut(&current_id) {
                tool.on_deactivate(scene);
            }
            self.previous_tool = Some(current_id);
        }

        self.active_tool = Some(id);
        if let Some(tool) = self.tools.get_mut(&id) {
            tool.on_activate(scene);
        }
        true
    }

    /// Switch to previous tool.
    pub fn switch_to_previous(&mut self, scene: &mut dyn SceneHost) -> bool {
        match self.previous_tool {
            Some(prev) => self.switch_to(prev, scene),
            None => false,
        }
    }

    /// Forward one frame to the active tool.
    pub fn interact(&mut self, ctx: &mut ViewContext<'_>, drag_area: DragArea) -> PlacementOutcome {
        match self.active_tool.and_then(|id| self.tools.get_mut(&id)) {
            Some(tool) => tool.on_interact(ctx, drag_area),
            None => PlacementOutcome::Idle,
        }
    }

    /// Get all registered tool IDs.
    pub fn tool_ids(&self) -> impl Iterator<Item = ToolId> + '_ {
        self.tools.keys().copied()
    }

    /// Distinct menu groups, sorted.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = self.tools.values().map(|t| t.group()).collect();
        groups.sort_unstable();
        groups.dedup();
        groups
    }

    /// Tools listed under a menu group.
    pub fn tools_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = ToolId> + 'a {
        self.tools
            .iter()
            .filter(move |(_, tool)| tool.group() == group)
            .map(|(id, _)| *id)
    }

    /// Find tool by shortcut key.
    pub fn find_by_shortcut(&self, key: &str) -> Option<ToolId> {
        self.tools
            .iter()
            .find(|(_, tool)| tool.shortcut() == Some(key))
            .map(|(id, _)| *id)
    }
}
