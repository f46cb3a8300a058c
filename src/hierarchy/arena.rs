//! Generation-checked arena holding the comparison hierarchy.

use super::item::{
    BaseFolderPair, Children, FilePair, FolderPair, FsObject, PairItem, SymlinkPair,
};
use super::path::ItemPath;
use crate::error::HierarchyError;
use crate::types::ByteCount;
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Hierarchy shared between the comparison engine and the view.
pub type SharedHierarchy = Arc<RwLock<Hierarchy>>;

/// Weak handle to an object in a [`Hierarchy`].
///
/// A handle stays valid until the object is removed; afterwards the slot's
/// generation moves on and the handle no longer resolves, even if the slot is
/// reused for a new object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObjectId {
    index: u32,
    generation: u32,
}

impl ObjectId {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    object: Option<FsObject>,
}

enum ChildKind {
    Folder,
    File,
    Symlink,
}

/// Arena of base folders, folders, files and symlinks.
#[derive(Debug, Default)]
pub struct Hierarchy {
    slots: Vec<Slot>,
    free: Vec<u32>,
    base_folders: Vec<ObjectId>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedHierarchy {
        Arc::new(RwLock::new(self))
    }

    /// Base folders in insertion order.
    pub fn base_folders(&self) -> &[ObjectId] {
        &self.base_folders
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.object.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn resolve(&self, id: ObjectId) -> Option<&FsObject> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.object.as_ref())
    }

    fn resolve_mut(&mut self, id: ObjectId) -> Option<&mut FsObject> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.object.as_mut())
    }

    pub fn base_folder(&self, id: ObjectId) -> Option<&BaseFolderPair> {
        match self.resolve(id)? {
            FsObject::BaseFolder(base) => Some(base),
            _ => None,
        }
    }

    pub fn folder(&self, id: ObjectId) -> Option<&FolderPair> {
        match self.resolve(id)? {
            FsObject::Folder(folder) => Some(folder),
            _ => None,
        }
    }

    pub fn file(&self, id: ObjectId) -> Option<&FilePair> {
        match self.resolve(id)? {
            FsObject::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn symlink(&self, id: ObjectId) -> Option<&SymlinkPair> {
        match self.resolve(id)? {
            FsObject::Symlink(link) => Some(link),
            _ => None,
        }
    }

    pub fn pair_item(&self, id: ObjectId) -> Option<&PairItem> {
        self.resolve(id)?.pair_item()
    }

    /// Children of a base folder or folder.
    pub fn children(&self, id: ObjectId) -> Option<&Children> {
        self.resolve(id)?.children()
    }

    fn insert(&mut self, object: FsObject) -> ObjectId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.object = Some(object);
            return ObjectId::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            object: Some(object),
        });
        ObjectId::new(index, 0)
    }

    pub fn add_base_folder(&mut self, left: ItemPath, right: ItemPath) -> ObjectId {
        let id = self.insert(FsObject::BaseFolder(BaseFolderPair {
            left,
            right,
            children: Children::default(),
        }));
        self.base_folders.push(id);
        id
    }

    pub fn add_folder(&mut self, parent: ObjectId, item: PairItem) -> Result<ObjectId, HierarchyError> {
        self.attach(parent, ChildKind::Folder, |parent| {
            FsObject::Folder(FolderPair {
                item,
                parent,
                children: Children::default(),
            })
        })
    }

    pub fn add_file(
        &mut self,
        parent: ObjectId,
        item: PairItem,
        size_left: Option<ByteCount>,
        size_right: Option<ByteCount>,
    ) -> Result<ObjectId, HierarchyError> {
        self.attach(parent, ChildKind::File, |parent| {
            FsObject::File(FilePair {
                item,
                parent,
                size_left,
                size_right,
            })
        })
    }

    pub fn add_symlink(&mut self, parent: ObjectId, item: PairItem) -> Result<ObjectId, HierarchyError> {
        self.attach(parent, ChildKind::Symlink, |parent| {
            FsObject::Symlink(SymlinkPair { item, parent })
        })
    }

    fn attach(
        &mut self,
        parent: ObjectId,
        kind: ChildKind,
        build: impl FnOnce(ObjectId) -> FsObject,
    ) -> Result<ObjectId, HierarchyError> {
        match self.resolve(parent) {
            None => return Err(HierarchyError::StaleHandle(parent)),
            Some(obj) if obj.children().is_none() => {
                return Err(HierarchyError::NotAContainer(parent))
            }
            Some(_) => {}
        }
        let id = self.insert(build(parent));
        if let Some(children) = self.resolve_mut(parent).and_then(FsObject::children_mut) {
            match kind {
                ChildKind::Folder => children.folders.push(id),
                ChildKind::File => children.files.push(id),
                ChildKind::Symlink => children.symlinks.push(id),
            }
        }
        Ok(id)
    }

    /// Toggle the user exclusion flag of a folder, file or symlink.
    pub fn set_active(&mut self, id: ObjectId, active: bool) -> Result<(), HierarchyError> {
        let object = self
            .resolve_mut(id)
            .ok_or(HierarchyError::StaleHandle(id))?;
        let item = object
            .pair_item_mut()
            .ok_or(HierarchyError::NotAPairItem(id))?;
        item.active = active;
        Ok(())
    }

    /// Remove an object and everything below it. Handles to removed objects stop
    /// resolving.
    pub fn remove(&mut self, id: ObjectId) -> Result<(), HierarchyError> {
        let parent = self
            .resolve(id)
            .ok_or(HierarchyError::StaleHandle(id))?
            .parent();

        match parent.and_then(|p| self.resolve_mut(p)).and_then(FsObject::children_mut) {
            Some(children) => children.detach(id),
            None => self.base_folders.retain(|b| *b != id),
        }

        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            let slot = &mut self.slots[current.index as usize];
            if let Some(object) = slot.object.take() {
                if let Some(children) = object.children() {
                    pending.extend(children.folders.iter().copied());
                    pending.extend(children.files.iter().copied());
                    pending.extend(children.symlinks.iter().copied());
                }
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(current.index);
            }
        }
        Ok(())
    }
}
