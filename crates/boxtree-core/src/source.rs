//! Tree capabilities.
//!
//! The layout engine never sees a concrete node type. It asks a
//! [`TreeSource`] for two things: the ordered children of a node and the
//! text to display for it. Children may include absent entries (`None`),
//! which are skipped.
//!
//! Sources are expected to be free of side effects. Rendering from several
//! threads at once is sound exactly when the source is `Sync` and its
//! methods do not mutate shared state; nothing here enforces that.

/// Access to a tree of `N` nodes.
pub trait TreeSource<N> {
    /// Ordered children of `node`. `None` entries are dropped before layout.
    fn children(&self, node: &N) -> Vec<Option<N>>;

    /// Display text for `node`. May contain newlines.
    fn value(&self, node: &N) -> String;
}

impl<N, S: TreeSource<N> + ?Sized> TreeSource<N> for &S {
    fn children(&self, node: &N) -> Vec<Option<N>> {
        (**self).children(node)
    }

    fn value(&self, node: &N) -> String {
        (**self).value(node)
    }
}

/// A [`TreeSource`] built from two closures.
///
/// ```
/// use boxtree_core::{FnSource, TreeSource};
///
/// #[derive(Clone)]
/// struct Node {
///     name: &'static str,
///     kids: Vec<Node>,
/// }
///
/// let source = FnSource::new(|n: &Node| n.kids.clone(), |n: &Node| n.name);
/// let root = Node { name: "root", kids: vec![Node { name: "leaf", kids: vec![] }] };
/// assert_eq!(source.value(&root), "root");
/// assert_eq!(source.children(&root).len(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnSource<C, V> {
    children: C,
    value: V,
}

impl<C, V> FnSource<C, V> {
    /// Pair a children function with a value function.
    pub const fn new(children: C, value: V) -> Self {
        Self { children, value }
    }
}

impl<C, V> std::fmt::Debug for FnSource<C, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSource").finish_non_exhaustive()
    }
}

impl<N, C, V, I, T, S> TreeSource<N> for FnSource<C, V>
where
    C: Fn(&N) -> I,
    I: IntoIterator<Item = T>,
    T: Into<Option<N>>,
    V: Fn(&N) -> S,
    S: Into<String>,
{
    fn children(&self, node: &N) -> Vec<Option<N>> {
        (self.children)(node).into_iter().map(Into::into).collect()
    }

    fn value(&self, node: &N) -> String {
        (self.value)(node).into()
    }
}
