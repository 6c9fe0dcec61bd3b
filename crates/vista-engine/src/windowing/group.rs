use std::fmt::Debug;
use std::hash::Hash;

/// A list record with a stable identity.
pub trait Identified {
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;
}

/// One category of a [`GroupedItems`] list.
#[derive(Debug, Clone)]
pub struct ItemGroup<T> {
    key: String,
    items: Vec<T>,
    expanded: bool,
}

impl<T> ItemGroup<T> {
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Rows this group occupies: the header, plus its items when expanded.
    #[inline]
    fn row_count(&self) -> usize {
        1 + if self.expanded { self.items.len() } else { 0 }
    }
}

/// One flattened row of a grouped list.
#[derive(Debug, PartialEq)]
pub enum GroupRow<'a, T> {
    Header { group: usize, key: &'a str, len: usize, expanded: bool },
    Item { group: usize, index: usize, item: &'a T },
}

impl<T> Clone for GroupRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GroupRow<'_, T> {}

/// Items partitioned by category, each category collapsible.
///
/// Groups keep the order in which their first item appeared; items keep
/// their input order inside a group. Flattened, a collapsed group is one
/// header row and an expanded group is its header followed by its items, so
/// the result can be windowed like any uniform list.
#[derive(Debug, Clone)]
pub struct GroupedItems<T> {
    groups: Vec<ItemGroup<T>>,
}

impl<T: Identified> GroupedItems<T> {
    /// Partitions `items` with `category`. Every group starts collapsed
    /// except the one holding `active`, if any.
    pub fn new<I, F, K>(items: I, category: F, active: Option<&T::Id>) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> K,
        K: AsRef<str>,
    {
        let mut groups: Vec<ItemGroup<T>> = Vec::new();
        for item in items {
            let key = category(&item);
            let key = key.as_ref();
            match groups.iter_mut().find(|g| g.key == key) {
                Some(group) => group.items.push(item),
                None => groups.push(ItemGroup {
                    key: key.to_string(),
                    items: vec![item],
                    expanded: false,
                }),
            }
        }

        let mut this = Self { groups };
        if let Some(id) = active {
            this.set_active(id);
        }
        this
    }

    /// Expands the group containing `id`. Returns `false` if no item has it.
    pub fn set_active(&mut self, id: &T::Id) -> bool {
        match self.groups.iter_mut().find(|g| g.items.iter().any(|item| &item.id() == id)) {
            Some(group) => {
                group.expanded = true;
                true
            }
            None => {
                log::debug!("active item {id:?} not found in any group");
                false
            }
        }
    }

    /// Key of the group holding `id`.
    pub fn group_of(&self, id: &T::Id) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.items.iter().any(|item| &item.id() == id))
            .map(|g| g.key.as_str())
    }
}

impl<T> GroupedItems<T> {
    #[inline]
    pub fn groups(&self) -> &[ItemGroup<T>] {
        &self.groups
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.group(key).is_some_and(|g| g.expanded)
    }

    /// Flips a group. Returns the new state, or `None` for an unknown key.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let group = self.group_mut(key)?;
        group.expanded = !group.expanded;
        Some(group.expanded)
    }

    pub fn expand(&mut self, key: &str) -> bool {
        self.set_expanded(key, true)
    }

    pub fn collapse(&mut self, key: &str) -> bool {
        self.set_expanded(key, false)
    }

    /// Total flattened rows.
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(ItemGroup::row_count).sum()
    }

    /// Flattened row at `index`, or `None` past the end.
    pub fn row(&self, mut index: usize) -> Option<GroupRow<'_, T>> {
        for (g, group) in self.groups.iter().enumerate() {
            let rows = group.row_count();
            if index < rows {
                return Some(if index == 0 {
                    group.header(g)
                } else {
                    GroupRow::Item { group: g, index: index - 1, item: &group.items[index - 1] }
                });
            }
            index -= rows;
        }
        None
    }

    /// All flattened rows in display order.
    pub fn rows(&self) -> impl Iterator<Item = GroupRow<'_, T>> {
        self.rows_from(0)
    }

    /// Flattened rows from `start` on. Groups wholly before `start` are
    /// skipped by their row count, so only the rows yielded are visited.
    pub fn rows_from(&self, start: usize) -> impl Iterator<Item = GroupRow<'_, T>> {
        let mut skip = start;
        let mut first = self.groups.len();
        for (g, group) in self.groups.iter().enumerate() {
            let rows = group.row_count();
            if skip < rows {
                first = g;
                break;
            }
            skip -= rows;
        }
        self.groups[first..].iter().enumerate().flat_map(move |(i, group)| {
            group.rows_from(first + i, if i == 0 { skip } else { 0 })
        })
    }

    fn group(&self, key: &str) -> Option<&ItemGroup<T>> {
        self.groups.iter().find(|g| g.key == key)
    }

    fn group_mut(&mut self, key: &str) -> Option<&mut ItemGroup<T>> {
        self.groups.iter_mut().find(|g| g.key == key)
    }

    fn set_expanded(&mut self, key: &str, expanded: bool) -> bool {
        match self.group_mut(key) {
            Some(group) => {
                group.expanded = expanded;
                true
            }
            None => false,
        }
    }
}

impl<T> ItemGroup<T> {
    fn header(&self, group: usize) -> GroupRow<'_, T> {
        GroupRow::Header { group, key: &self.key, len: self.items.len(), expanded: self.expanded }
    }

    /// This group's rows, dropping the first `skip`.
    fn rows_from(&self, group: usize, skip: usize) -> impl Iterator<Item = GroupRow<'_, T>> {
        let items: &[T] = if self.expanded { &self.items } else { &[] };
        let header = (skip == 0).then(|| self.header(group));
        let first = skip.saturating_sub(1).min(items.len());
        header.into_iter().chain(
            items[first..]
                .iter()
                .enumerate()
                .map(move |(i, item)| GroupRow::Item { group, index: first + i, item }),
        )
    }
}
