use std::num::NonZero;

/// Handle to a node slot. Stores `index + 1` so that `Option<NodeId>` is
/// the same size as `NodeId`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct NodeId(NonZero<u32>);

impl NodeId {
    pub(crate) const MAX: usize = (u32::MAX - 1) as usize;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(
            index <= Self::MAX,
            "`NodeId::from_index()` - `index` > `NodeId::MAX`!"
        );
        // `index + 1` cannot be zero and cannot overflow u32 per the assert.
        Self(NonZero::new((index + 1) as u32).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Append-only slot store for tree nodes.
///
/// The tree never erases a single node, so there is no free list: `alloc`
/// always appends. Slots are still `Option` so that a consuming iterator
/// can move nodes out one by one with [`Arena::take`].
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        assert!(
            self.slots.len() <= NodeId::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            NodeId::MAX
        );
        self.slots.push(Some(element));
        NodeId::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        self.slots[id.to_index()]
            .as_ref()
            .expect("`Arena::get()` - `id` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        self.slots[id.to_index()]
            .as_mut()
            .expect("`Arena::get_mut()` - `id` is invalid!")
    }

    /// Moves the element out of its slot. The handle must not be used again.
    pub(crate) fn take(&mut self, id: NodeId) -> T {
        self.slots[id.to_index()]
            .take()
            .expect("`Arena::take()` - `id` is invalid!")
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}
