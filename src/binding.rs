//! Typed destinations for parsed values.
//!
//! A [`Slot`] is a shared cell the caller keeps a handle to; the parser holds
//! a clone inside a [`Binding`] and writes the converted value into it at the
//! end of every successful feed cycle.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::convert::{first_malformed, is_float_text, is_int_text, FromArg};

/// Shared, caller-visible storage for one bound value.
pub struct Slot<T>(Rc<RefCell<T>>);

impl<T> Slot<T> {
    pub fn new(value: T) -> Self {
        Slot(Rc::new(RefCell::new(value)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Slot(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Slot::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&*self.0.borrow()).finish()
    }
}

/// One bound destination, tagged by value shape.
#[derive(Debug, Clone)]
pub enum Binding {
    Bool(Slot<bool>),
    Str(Slot<String>),
    Int(Slot<i64>),
    Float(Slot<f64>),
    StrList(Slot<Vec<String>>),
    IntList(Slot<Vec<i64>>),
    FloatList(Slot<Vec<f64>>),
}

macro_rules! binding_from_slot {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<Slot<$ty>> for Binding {
                fn from(slot: Slot<$ty>) -> Self {
                    Binding::$variant(slot)
                }
            }
            impl From<&Slot<$ty>> for Binding {
                fn from(slot: &Slot<$ty>) -> Self {
                    Binding::$variant(slot.clone())
                }
            }
        )*
    };
}

binding_from_slot! {
    Bool => bool,
    Str => String,
    Int => i64,
    Float => f64,
    StrList => Vec<String>,
    IntList => Vec<i64>,
    FloatList => Vec<f64>,
}

impl Binding {
    pub fn is_bool(&self) -> bool {
        matches!(self, Binding::Bool(_))
    }

    /// First element of `raw` whose text does not fit this binding's numeric
    /// shape. Non-numeric bindings accept anything.
    pub fn malformed<'a>(&self, raw: &'a str) -> Option<&'a str> {
        match self {
            Binding::Int(_) | Binding::IntList(_) => first_malformed(raw, is_int_text),
            Binding::Float(_) | Binding::FloatList(_) => first_malformed(raw, is_float_text),
            _ => None,
        }
    }

    /// Write `raw` into the slot. A bool slot receives `present`; other slots
    /// are left untouched when `raw` is empty.
    pub fn assign(&self, present: bool, raw: &str) {
        if let Binding::Bool(slot) = self {
            slot.set(present);
            return;
        }
        if raw.is_empty() {
            return;
        }
        match self {
            Binding::Bool(_) => {}
            Binding::Str(slot) => slot.set(String::from_arg(raw)),
            Binding::Int(slot) => slot.set(i64::from_arg(raw)),
            Binding::Float(slot) => slot.set(f64::from_arg(raw)),
            Binding::StrList(slot) => slot.set(Vec::from_arg(raw)),
            Binding::IntList(slot) => slot.set(Vec::from_arg(raw)),
            Binding::FloatList(slot) => slot.set(Vec::from_arg(raw)),
        }
    }
}
