//! Pulse Core Runtime
//!
//! Foundational primitives shared by the Pulse theming and bootstrap layers:
//!
//! - **Colors**: RGBA values with hex parsing and interpolation
//! - **State Machines**: typed statecharts used to sequence scene startup
//! - **Main Queue**: a cooperative, single-threaded timer queue with a virtual clock
//!
//! # Example
//!
//! ```rust
//! use pulse_core::MainQueue;
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let queue = MainQueue::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = fired.clone();
//! queue.schedule_after(Duration::from_millis(1500), "splash", move |_| flag.set(true));
//!
//! queue.advance_by(Duration::from_millis(1499));
//! assert!(!fired.get());
//! queue.advance_by(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

pub mod color;
pub mod fsm;
pub mod main_queue;

pub use color::Color;
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
pub use main_queue::{MainQueue, TimerId};
