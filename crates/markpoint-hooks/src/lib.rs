//! Priority-ordered filter and action hooks.
//!
//! A [`HookBus`] keeps two independent tables keyed by hook name:
//!
//! - **Filters** transform a value. Every callback registered under a name
//!   receives the value returned by the previous one, and the last result is
//!   handed back to the caller.
//! - **Actions** produce side effects on a caller-supplied scope (typically an
//!   output buffer). Their return values are discarded.
//!
//! Callbacks run in ascending priority order. Callbacks sharing a priority run
//! in registration order.
//!
//! The bus is generic over two types chosen by the embedding crate:
//!
//! - `S`, the *scope* handed to callbacks (shared for filters, exclusive for
//!   actions), so callbacks can query or write to the state that invoked them;
//! - `C`, the typed *context* carrying the extra arguments of a call site.
//!
//! # Example
//!
//! ```
//! use markpoint_hooks::{DEFAULT_PRIORITY, HookBus};
//!
//! let mut hooks: HookBus<String, ()> = HookBus::new();
//! hooks.add_filter("title", |title: String, _: &String, _: &()| title.to_uppercase(), DEFAULT_PRIORITY, 1);
//! hooks.add_action("footer", |out: &mut String, _: &()| out.push_str("bye"), DEFAULT_PRIORITY, 1);
//!
//! let mut out = String::new();
//! let title = hooks.apply_filters("title", "hello".to_owned(), &out, &());
//! hooks.do_action("footer", &mut out, &());
//!
//! assert_eq!(title, "HELLO");
//! assert_eq!(out, "bye");
//! ```

mod bus;
mod table;

pub use bus::{ActionFn, DEFAULT_ARITY, DEFAULT_PRIORITY, FilterFn, HookBus};
