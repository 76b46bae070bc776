// ============================================================================
// REACTIVITY - Celda observable con replay del último valor
// ============================================================================
// - Al suscribirse se recibe el valor actual inmediatamente
// - Después, cada transición en el orden en que se aplicó (también si un
//   subscriber llama a `set` desde su propio callback)
// - Los clones comparten valor Y subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Identificador devuelto por `subscribe`, para `unsubscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner<T> {
    value: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
    pending: RefCell<VecDeque<T>>,
    notifying: Cell<bool>,
    next_id: Cell<u64>,
}

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    inner: Rc<Inner<T>>,
}

impl<T: Clone + 'static> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                subscribers: RefCell::new(Vec::new()),
                pending: RefCell::new(VecDeque::new()),
                notifying: Cell::new(false),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        self.stage(new_value);
        self.flush();
    }

    /// Escribe el valor y encola la notificación sin entregarla todavía.
    /// Permite dejar varias celdas coherentes antes de avisar a nadie.
    pub fn stage(&self, new_value: T) {
        *self.inner.value.borrow_mut() = new_value.clone();
        self.inner.pending.borrow_mut().push_back(new_value);
    }

    /// Entrega las notificaciones encoladas por `stage`
    pub fn flush(&self) {
        self.drain();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.get();
        updater(&mut value);
        self.set(value);
    }

    /// Suscribirse a cambios; el callback recibe el valor actual de inmediato.
    ///
    /// Si la suscripción ocurre durante una notificación con valores aún
    /// encolados, no hay replay: el último encolado ya es el valor actual y
    /// llegará por la cola.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);

        let callback: Subscriber<T> = Rc::new(callback);
        self.inner.subscribers.borrow_mut().push((id, callback.clone()));

        let queued = self.inner.notifying.get() && !self.inner.pending.borrow().is_empty();
        if !queued {
            let current = self.get();
            callback(&current);
        }
        id
    }

    /// Cancelar suscripción; `false` si ya no existía
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Entrega los valores pendientes en orden. Un `set` reentrante solo encola.
    fn drain(&self) {
        if self.inner.notifying.replace(true) {
            return;
        }
        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(value) = next else { break };
            // Snapshot: los callbacks pueden (des)suscribirse mientras iteramos
            let subscribers: Vec<Subscriber<T>> = self
                .inner
                .subscribers
                .borrow()
                .iter()
                .map(|(_, callback)| callback.clone())
                .collect();
            for callback in subscribers {
                callback(&value);
            }
        }
        self.inner.notifying.set(false);
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Default + Clone + 'static> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
