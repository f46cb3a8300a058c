//! Subtree extraction: the filtered, aggregated shadow of the comparison
//! hierarchy.
//!
//! Containers live in a flat arena owned by [`ShadowForest`] and refer to each
//! other by [`ContainerId`]. The forest is rebuilt wholesale for every filter
//! change, so ids are only meaningful together with the forest that issued them.

use super::display_name::short_name;
use super::filter::ViewFilter;
use crate::hierarchy::{Children, Hierarchy, ObjectId};
use crate::types::{ByteCount, ItemCount};
use tracing::debug;

/// Index of a container inside a [`ShadowForest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(usize);

/// Aggregated view of one folder (or base folder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    /// Bytes of this folder's visible files plus all retained subfolders
    pub bytes_gross: ByteCount,
    /// Bytes of the visible files directly in this folder
    pub bytes_net: ByteCount,
    pub item_count_gross: ItemCount,
    pub item_count_net: ItemCount,
    pub sub_dirs: Vec<ContainerId>,
    /// First visible file or symlink; stands in for the whole "Files" group
    pub first_file_id: Option<ObjectId>,
}

impl Container {
    /// Whether expanding this container yields any rows.
    pub fn has_children(&self) -> bool {
        self.first_file_id.is_some() || !self.sub_dirs.is_empty()
    }

    /// Suppress the "Files" group for folders without subfolders: there is
    /// nothing to tell it apart from. Call after the inclusion check.
    fn compress(&mut self) {
        if self.sub_dirs.is_empty() {
            self.first_file_id = None;
        }
    }
}

/// What a container stands for in the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerOrigin {
    Root {
        base_folder: ObjectId,
        display_name: String,
    },
    Directory {
        folder: ObjectId,
    },
}

impl ContainerOrigin {
    /// Hierarchy object behind the container.
    pub fn object(&self) -> ObjectId {
        match self {
            ContainerOrigin::Root { base_folder, .. } => *base_folder,
            ContainerOrigin::Directory { folder } => *folder,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShadowNode {
    pub container: Container,
    pub origin: ContainerOrigin,
}

/// Extracted containers of all visible base folders.
#[derive(Debug, Default)]
pub struct ShadowForest {
    nodes: Vec<ShadowNode>,
    roots: Vec<ContainerId>,
}

impl ShadowForest {
    /// Extract every base folder. Base folders without any visible content are
    /// dropped.
    pub fn build(hierarchy: &Hierarchy, base_folders: &[ObjectId], filter: &ViewFilter) -> Self {
        let mut forest = ShadowForest::default();

        for &base_id in base_folders {
            let Some(base) = hierarchy.base_folder(base_id) else {
                continue;
            };
            let mut root = forest.extract_visible_subtree(hierarchy, base.children(), filter);
            if !root.has_children() {
                continue;
            }
            root.compress();
            let id = forest.push(ShadowNode {
                container: root,
                origin: ContainerOrigin::Root {
                    base_folder: base_id,
                    display_name: short_name(&base.left, &base.right),
                },
            });
            forest.roots.push(id);
        }

        debug!(
            roots = forest.roots.len(),
            containers = forest.nodes.len(),
            "Extracted visible subtree"
        );
        forest
    }

    fn push(&mut self, node: ShadowNode) -> ContainerId {
        self.nodes.push(node);
        ContainerId(self.nodes.len() - 1)
    }

    /// Aggregate the items under `children` that pass `filter`. Retained
    /// subfolders are pushed into the forest; the returned container itself is
    /// not.
    pub fn extract_visible_subtree(
        &mut self,
        hierarchy: &Hierarchy,
        children: &Children,
        filter: &ViewFilter,
    ) -> Container {
        let mut cont = Container::default();

        for &file_id in &children.files {
            let Some(file) = hierarchy.file(file_id) else {
                continue;
            };
            if filter.includes(&file.item) {
                cont.bytes_net += file.view_bytes();
                cont.item_count_net += 1;
                cont.first_file_id.get_or_insert(file_id);
            }
        }

        for &link_id in &children.symlinks {
            let Some(link) = hierarchy.symlink(link_id) else {
                continue;
            };
            if filter.includes(&link.item) {
                cont.item_count_net += 1;
                cont.first_file_id.get_or_insert(link_id);
            }
        }

        cont.bytes_gross += cont.bytes_net;
        cont.item_count_gross += cont.item_count_net;

        for &folder_id in &children.folders {
            let Some(folder) = hierarchy.folder(folder_id) else {
                continue;
            };
            let included = filter.includes(&folder.item);

            let mut sub = self.extract_visible_subtree(hierarchy, folder.children(), filter);
            if included {
                sub.item_count_gross += 1;
            }

            cont.bytes_gross += sub.bytes_gross;
            cont.item_count_gross += sub.item_count_gross;

            if !included && !sub.has_children() {
                continue;
            }
            sub.compress();
            let id = self.push(ShadowNode {
                container: sub,
                origin: ContainerOrigin::Directory { folder: folder_id },
            });
            cont.sub_dirs.push(id);
        }

        cont
    }

    pub fn roots(&self) -> &[ContainerId] {
        &self.roots
    }

    pub fn node(&self, id: ContainerId) -> Option<&ShadowNode> {
        self.nodes.get(id.0)
    }

    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.node(id).map(|n| &n.container)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
