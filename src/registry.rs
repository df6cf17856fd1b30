//! Boxer Registry
//!
//! External object systems hand reactors around as opaque values. To pull
//! such a value back into a typed graph, the adapter layer registers, per
//! foreign type, the three conversions needed: to a typed [`SharedBox<T>`],
//! to a [`SharedBox<Object>`], and to a [`SharedBox<()>`]. The registry is a
//! process-wide map from the foreign value's [`TypeId`] to that triple,
//! populated at adapter-module load and never drained.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use tracing::debug;

use crate::reactor::{Object, Reactor, SharedBox, ToObject, ToVoid};

/// The function pointers needed to box an opaque foreign value.
#[derive(Clone, Copy)]
pub struct Boxers {
    /// Convert the value to a typed `SharedBox<T>`.
    ///
    /// The destination is a `&mut Option<SharedBox<T>>` behind `dyn Any`;
    /// the boxer fills it only when the requested `T` matches.
    pub boxer: fn(value: &dyn Any, destination: &mut dyn Any),

    /// Convert the value to a `SharedBox<Object>`.
    pub object_boxer: fn(value: &dyn Any) -> Option<SharedBox<Object>>,

    /// Convert the value to a `SharedBox<()>`.
    pub void_boxer: fn(value: &dyn Any) -> Option<SharedBox<()>>,
}

static REGISTRY: OnceLock<RwLock<HashMap<TypeId, Boxers>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<TypeId, Boxers>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register the boxer triple for a foreign type.
pub fn register_reactor(type_id: TypeId, boxers: Boxers) {
    registry()
        .write()
        .expect("boxer registry lock poisoned")
        .insert(type_id, boxers);
    debug!(?type_id, "registered reactor boxers");
}

/// Look up the boxer triple for a foreign value.
pub fn find_boxers(value: &dyn Any) -> Option<Boxers> {
    registry()
        .read()
        .expect("boxer registry lock poisoned")
        .get(&value.type_id())
        .copied()
}

/// Register a cloneable reactor type, deriving all three boxers from it.
pub fn register_reactor_of<R>()
where
    R: Reactor + Clone + Send + Sync + 'static,
    R::Output: Clone + Send + Sync + 'static,
{
    register_reactor(
        TypeId::of::<R>(),
        Boxers {
            boxer: |value, destination| {
                if let Some(reactor) = value.downcast_ref::<R>() {
                    if let Some(slot) = destination.downcast_mut::<Option<SharedBox<R::Output>>>()
                    {
                        *slot = Some(SharedBox::new(reactor.clone()));
                    }
                }
            },
            object_boxer: |value| {
                value
                    .downcast_ref::<R>()
                    .map(|reactor| SharedBox::new(ToObject::new(reactor.clone())))
            },
            void_boxer: |value| {
                value
                    .downcast_ref::<R>()
                    .map(|reactor| SharedBox::new(ToVoid::new(reactor.clone())))
            },
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactor::{constant, Constant};
    use crate::state::State;

    #[test]
    fn registered_types_box_through_the_registry() {
        register_reactor_of::<Constant<i32>>();

        let foreign = constant(9);
        let value: &dyn Any = &foreign;
        let boxers = find_boxers(value).expect("constant was registered");

        let mut slot: Option<SharedBox<i32>> = None;
        (boxers.boxer)(value, &mut slot);
        let mut typed = slot.expect("matching destination type");
        assert_eq!(typed.commit(0), State::CompleteEvaluated);
        assert_eq!(typed.eval().get().unwrap(), 9);

        let mut object = (boxers.object_boxer)(value).expect("same foreign type");
        assert_eq!(object.commit(0), State::CompleteEvaluated);
        let erased = object.eval().get().unwrap();
        assert_eq!(*erased.downcast_ref::<i32>().unwrap(), 9);

        let mut void = (boxers.void_boxer)(value).expect("same foreign type");
        assert_eq!(void.commit(0), State::CompleteEvaluated);
    }

    #[test]
    fn unknown_types_have_no_boxers() {
        let value: &dyn Any = &"not a reactor";
        assert!(find_boxers(value).is_none());
    }

    #[test]
    fn mismatched_destination_is_left_untouched() {
        register_reactor_of::<Constant<i32>>();
        let foreign = constant(9);
        let value: &dyn Any = &foreign;
        let boxers = find_boxers(value).expect("constant was registered");

        let mut slot: Option<SharedBox<String>> = None;
        (boxers.boxer)(value, &mut slot);
        assert!(slot.is_none());
    }
}
