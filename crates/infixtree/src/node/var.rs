//! Shared variable handles

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct VarSlot {
    name: String,
    kind: String,
}

/// A variable reference or declaration site.
///
/// `Var` is a handle: cloning it (or passing it to several node
/// constructors) yields aliases of one variable, and a rename through any
/// alias is observed at every use site. Use [`Var::detach`] for an
/// independent copy.
///
/// # Example
///
/// ```
/// use infixtree::{render, Node, Var};
///
/// let i = Var::new("i", "int");
/// let expr = Node::bin_op("*", Node::var(&i), Node::var(&i));
/// assert_eq!(render(&expr).unwrap(), "i * i");
///
/// i.set_name("j");
/// assert_eq!(render(&expr).unwrap(), "j * j");
/// ```
#[derive(Clone)]
pub struct Var {
    slot: Rc<RefCell<VarSlot>>,
}

impl Var {
    /// Create a new variable with a name and a type tag.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(VarSlot {
                name: name.into(),
                kind: kind.into(),
            })),
        }
    }

    /// Create a variable with an empty type tag.
    pub fn untyped(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// The variable's current name.
    pub fn name(&self) -> String {
        self.slot.borrow().name.clone()
    }

    /// The variable's current type tag.
    pub fn kind(&self) -> String {
        self.slot.borrow().kind.clone()
    }

    /// Rename the variable at every use site sharing this handle.
    pub fn set_name(&self, name: impl Into<String>) {
        self.slot.borrow_mut().name = name.into();
    }

    /// Change the type tag at every use site sharing this handle.
    pub fn set_kind(&self, kind: impl Into<String>) {
        self.slot.borrow_mut().kind = kind.into();
    }

    /// Check whether two handles alias the same variable.
    pub fn same_var(&self, other: &Var) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }

    /// Copy the current name and type into a new, unaliased variable.
    pub fn detach(&self) -> Var {
        let slot = self.slot.borrow();
        Var::new(slot.name.clone(), slot.kind.clone())
    }
}

// Structural: two distinct variables with equal name and kind compare equal.
impl PartialEq for Var {
    fn eq(&self, other: &Self) -> bool {
        self.same_var(other) || *self.slot.borrow() == *other.slot.borrow()
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.borrow();
        write!(f, "Var({:?}, {:?})", slot.name, slot.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_aliases() {
        let a = Var::new("i", "int");
        let b = a.clone();
        b.set_name("j");
        assert_eq!(a.name(), "j");
        assert!(a.same_var(&b));
    }

    #[test]
    fn test_detach_breaks_alias() {
        let a = Var::new("i", "int");
        let b = a.detach();
        b.set_kind("long");
        assert_eq!(a.kind(), "int");
        assert!(!a.same_var(&b));
    }

    #[test]
    fn test_structural_eq() {
        assert_eq!(Var::new("x", "int"), Var::new("x", "int"));
        assert_ne!(Var::new("x", "int"), Var::new("x", "float"));
    }

    #[test]
    fn test_debug_repr() {
        assert_eq!(format!("{:?}", Var::untyped("x")), r#"Var("x", "")"#);
    }
}
