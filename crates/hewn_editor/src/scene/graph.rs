//! In-memory scene hierarchy implementing [`SceneHost`].

use std::collections::HashMap;

use glam::{Mat4, Vec3, Vec4};

use super::{ObjectId, SceneHost, VisualizationMode};
use crate::error::{SceneError, SceneResult};
use crate::placement::CsgOperation;

/// What a scene object is.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneObjectKind {
    /// Container that generators are composed under
    Model,
    /// Parametric generator of the given kind
    Generator { kind: String },
}

/// A node in the scene hierarchy.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: SceneObjectKind,
    pub parent: Option<ObjectId>,
    pub children: Vec<ObjectId>,
    /// Transform relative to the parent
    pub local_transform: Mat4,
    pub operation: CsgOperation,
    /// Last parameters pushed through `update_generator`
    pub parameters: serde_json::Value,
    /// False while a tool still owns the object
    pub committed: bool,
    /// Number of generator rebuilds requested
    pub rebuilds: u32,
}

impl SceneObject {
    fn new(id: ObjectId, name: impl Into<String>, kind: SceneObjectKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            parent: None,
            children: Vec::new(),
            local_transform: Mat4::IDENTITY,
            operation: CsgOperation::Additive,
            parameters: serde_json::Value::Null,
            committed: true,
            rebuilds: 0,
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self.kind, SceneObjectKind::Model)
    }

    pub fn generator_kind(&self) -> Option<&str> {
        match &self.kind {
            SceneObjectKind::Generator { kind } => Some(kind),
            SceneObjectKind::Model => None,
        }
    }
}

/// Flat object store with parent links, selection and view state.
#[derive(Debug, Default)]
pub struct SceneGraph {
    objects: Vec<SceneObject>,
    object_map: HashMap<ObjectId, usize>,
    next_id: u32,
    active_model: Option<ObjectId>,
    selected: Option<ObjectId>,
    outline_mode: VisualizationMode,
    outline_mode_changes: u32,
    creation_blocked: bool,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_object_id(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId(self.next_id)
    }

    /// Add a model at the root with a world transform.
    pub fn add_model(&mut self, name: impl Into<String>, transform: Mat4) -> ObjectId {
        let id = self.next_object_id();
        let mut model = SceneObject::new(id, name, SceneObjectKind::Model);
        model.local_transform = transform;
        self.insert(model);
        id
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.object_map.get(&id).map(|&idx| &self.objects[idx])
    }

    fn get_mut(&mut self, id: ObjectId) -> SceneResult<&mut SceneObject> {
        match self.object_map.get(&id) {
            Some(&idx) => Ok(&mut self.objects[idx]),
            None => Err(SceneError::ObjectNotFound(id)),
        }
    }

    fn require(&self, id: ObjectId) -> SceneResult<&SceneObject> {
        self.get(id).ok_or(SceneError::ObjectNotFound(id))
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.object_map.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    /// Generators still owned by a placement tool.
    pub fn provisional(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| !o.committed)
    }

    pub fn generators(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| !o.is_model())
    }

    pub fn active_model(&self) -> Option<ObjectId> {
        self.active_model
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    /// How many times the outline mode was actually changed.
    pub fn outline_mode_changes(&self) -> u32 {
        self.outline_mode_changes
    }

    /// Make the object factory fail, as a host would when it cannot
    /// instantiate a generator.
    pub fn set_creation_blocked(&mut self, blocked: bool) {
        self.creation_blocked = blocked;
    }

    /// World transform, composed through the parent chain.
    pub fn world_transform(&self, id: ObjectId) -> SceneResult<Mat4> {
        let object = self.require(id)?;
        match object.parent {
            Some(parent) => Ok(self.world_transform(parent)? * object.local_transform),
            None => Ok(object.local_transform),
        }
    }

    fn parent_world(&self, parent: Option<ObjectId>) -> SceneResult<Mat4> {
        match parent {
            Some(parent) => self.world_transform(parent),
            None => Ok(Mat4::IDENTITY),
        }
    }

    fn insert(&mut self, object: SceneObject) {
        let id = object.id;
        if let Some(parent) = object.parent {
            if let Ok(parent) = self.get_mut(parent) {
                parent.children.push(id);
            }
        }
        let idx = self.objects.len();
        self.objects.push(object);
        self.object_map.insert(id, idx);
    }

    fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let idx = self.object_map.remove(&id)?;
        let object = self.objects.remove(idx);

        for eidx in self.object_map.values_mut() {
            if *eidx > idx {
                *eidx -= 1;
            }
        }

        if let Some(parent) = object.parent {
            if let Ok(parent) = self.get_mut(parent) {
                parent.children.retain(|&c| c != id);
            }
        }
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.active_model == Some(id) {
            self.active_model = None;
        }

        for child in &object.children {
            self.remove(*child);
        }
        Some(object)
    }
}

impl SceneHost for SceneGraph {
    fn resolve_or_create_active_model(&mut self, beneath: Option<ObjectId>) -> Option<ObjectId> {
        if let Some(model) = beneath.filter(|&id| self.get(id).is_some_and(SceneObject::is_model)) {
            self.active_model = Some(model);
            return Some(model);
        }
        if let Some(model) = self.active_model.filter(|&id| self.contains(id)) {
            return Some(model);
        }
        let model = self.add_model("Model", Mat4::IDENTITY);
        log::debug!("Created default model {}", model);
        self.active_model = Some(model);
        Some(model)
    }

    fn create_generator_object(
        &mut self,
        kind: &str,
        name: &str,
        parent: Option<ObjectId>,
        transform: Mat4,
    ) -> SceneResult<ObjectId> {
        if self.creation_blocked {
            return Err(SceneError::CreationFailed {
                kind: kind.to_string(),
                reason: "object factory is blocked".to_string(),
            });
        }
        let parent = parent.filter(|&id| self.contains(id));
        let local = self.parent_world(parent)?.inverse() * transform;

        let id = self.next_object_id();
        let mut object = SceneObject::new(
            id,
            name,
            SceneObjectKind::Generator { kind: kind.to_string() },
        );
        object.parent = parent;
        object.local_transform = local;
        object.committed = false;
        self.insert(object);
        Ok(id)
    }

    fn set_transform(&mut self, object: ObjectId, transform: Mat4) -> SceneResult<()> {
        let parent = self.require(object)?.parent;
        let local = self.parent_world(parent)?.inverse() * transform;
        self.get_mut(object)?.local_transform = local;
        Ok(())
    }

    fn local_position(&self, object: ObjectId) -> SceneResult<Vec3> {
        Ok(self.require(object)?.local_transform.w_axis.truncate())
    }

    fn set_local_position(&mut self, object: ObjectId, position: Vec3) -> SceneResult<()> {
        let object = self.get_mut(object)?;
        object.local_transform.w_axis = Vec4::from((position, 1.0));
        Ok(())
    }

    fn up_vector(&self, object: ObjectId) -> SceneResult<Vec3> {
        Ok(self.world_transform(object)?.transform_vector3(Vec3::Y).normalize_or_zero())
    }

    fn update_generator(
        &mut self,
        object: ObjectId,
        operation: CsgOperation,
        parameters: serde_json::Value,
    ) -> SceneResult<()> {
        let object = self.get_mut(object)?;
        object.operation = operation;
        object.parameters = parameters;
        object.rebuilds += 1;
        Ok(())
    }

    fn commit(&mut self, object: ObjectId) -> SceneResult<()> {
        self.get_mut(object)?.committed = true;
        Ok(())
    }

    fn destroy(&mut self, object: ObjectId) {
        if self.remove(object).is_none() {
            log::trace!("Ignoring destroy of unknown {}", object);
        }
    }

    fn select(&mut self, object: ObjectId) {
        if self.contains(object) {
            self.selected = Some(object);
        }
    }

    fn outline_mode(&self) -> VisualizationMode {
        self.outline_mode
    }

    fn set_outline_mode(&mut self, mode: VisualizationMode) {
        self.outline_mode = mode;
        self.outline_mode_changes += 1;
    }
}
