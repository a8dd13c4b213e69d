//! Manual doubles for the collaborators of a menu item.
#![allow(dead_code)]

use xmenu_widget::MenuItem;
use xmenu_widget::core::animation::{Animation, Animator, Transition};
use xmenu_widget::core::event::Status;
use xmenu_widget::core::time::{Sleep, Timer};
use xmenu_widget::core::{Document, Effect, Event, Kind, NodeId, Point, Rectangle, Settings, Shell, Size};

use futures::channel::oneshot;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// An [`Animator`] whose transitions only finish when told to.
#[derive(Clone, Default)]
pub struct Animations {
    running: Rc<RefCell<VecDeque<(Transition, oneshot::Sender<()>)>>>,
}

impl Animations {
    pub fn len(&self) -> usize {
        self.running.borrow().len()
    }

    pub fn transitions(&self) -> Vec<Transition> {
        self.running
            .borrow()
            .iter()
            .map(|(transition, _)| *transition)
            .collect()
    }

    /// Finishes the oldest running transition.
    pub fn finish_next(&self) -> Transition {
        let (transition, sender) = self
            .running
            .borrow_mut()
            .pop_front()
            .expect("no running transition");

        let _ = sender.send(());

        transition
    }
}

impl Animator for Animations {
    fn animate(&self, transition: Transition) -> Animation {
        let (sender, receiver) = oneshot::channel();

        self.running.borrow_mut().push_back((transition, sender));

        Box::pin(async move {
            let _ = receiver.await;
        })
    }
}

/// A [`Timer`] whose sleeps only elapse when told to.
#[derive(Clone, Default)]
pub struct Timers {
    sleeping: Rc<RefCell<VecDeque<(Duration, oneshot::Sender<()>)>>>,
}

impl Timers {
    pub fn len(&self) -> usize {
        self.sleeping.borrow().len()
    }

    /// Elapses the oldest sleep.
    pub fn elapse_next(&self) -> Duration {
        let (duration, sender) = self
            .sleeping
            .borrow_mut()
            .pop_front()
            .expect("no pending sleep");

        let _ = sender.send(());

        duration
    }
}

impl Timer for Timers {
    fn sleep(&self, duration: Duration) -> Sleep {
        let (sender, receiver) = oneshot::channel();

        self.sleeping.borrow_mut().push_back((duration, sender));

        Box::pin(async move {
            let _ = receiver.await;
        })
    }
}

/// What an item reported while handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub is_default_prevented: bool,
    pub effects: usize,
}

/// A document with a menu, driven on a local executor.
pub struct Harness {
    pub document: Rc<RefCell<Document>>,
    pub menu: NodeId,
    pub animations: Animations,
    pub timers: Timers,
    pool: LocalPool,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        let document = Rc::new(RefCell::new(Document::new()));
        let menu = document.borrow_mut().create(Kind::Menu);

        Self {
            document,
            menu,
            animations: Animations::default(),
            timers: Timers::default(),
            pool: LocalPool::new(),
        }
    }

    /// Creates a node of the given kind under `parent`.
    pub fn node(&self, parent: NodeId, kind: Kind) -> NodeId {
        let mut document = self.document.borrow_mut();
        let node = document.create(kind);

        document.append(parent, node);
        node
    }

    /// Creates a connected item under `parent`, laid out at 100x20.
    pub fn item(&self, parent: NodeId) -> MenuItem {
        self.item_with(parent, Settings::default())
    }

    pub fn item_with(&self, parent: NodeId, settings: Settings) -> MenuItem {
        let id = self.node(parent, Kind::MenuItem);

        self.document
            .borrow_mut()
            .set_bounds(id, Rectangle::new(Point::ORIGIN, Size::new(100.0, 20.0)));

        let item = MenuItem::with_settings(
            Rc::clone(&self.document),
            id,
            self.animations.clone(),
            self.timers.clone(),
            settings,
        );

        item.connect();
        item
    }

    /// Delivers an event to an item and spawns the effects it produced.
    pub fn update(&mut self, item: &MenuItem, event: Event) -> Outcome {
        let mut effects = Vec::new();

        let outcome = {
            let mut shell = Shell::new(&mut effects);
            item.update(&event, &mut shell);

            Outcome {
                status: shell.event_status(),
                is_default_prevented: shell.is_default_prevented(),
                effects: 0,
            }
        };

        let spawned = effects.len();
        self.spawn(effects);

        Outcome {
            effects: spawned,
            ..outcome
        }
    }

    pub fn spawn(&mut self, effects: Vec<Effect>) {
        let spawner = self.pool.spawner();

        for effect in effects {
            spawner.spawn_local(effect).expect("spawn effect");
        }

        self.run();
    }

    /// Polls every effect until none can make progress.
    pub fn run(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn finish_animation(&mut self) -> Transition {
        let transition = self.animations.finish_next();
        self.run();

        transition
    }

    pub fn elapse(&mut self) -> Duration {
        let duration = self.timers.elapse_next();
        self.run();

        duration
    }
}

/// Records the order in which callbacks ran.
#[derive(Clone, Default)]
pub struct Log {
    entries: Rc<RefCell<Vec<&'static str>>>,
}

impl Log {
    pub fn push(&self, entry: &'static str) -> impl FnOnce() + 'static {
        let entries = Rc::clone(&self.entries);

        move || entries.borrow_mut().push(entry)
    }

    pub fn entries(&self) -> Vec<&'static str> {
        self.entries.borrow().clone()
    }
}
