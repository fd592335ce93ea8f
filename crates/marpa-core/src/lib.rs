//! `marpa_core` -- a grammar/recognize/evaluate engine wrapping the
//! Marpa Earley-parsing kernel (`marpa_runtime_sys`) behind typed, safe
//! Rust handles.
//!
//! The public surface mirrors the three-phase workflow: build a
//! [`grammar::Grammar`], [`grammar::Grammar::precompute`] it, then drive
//! any number of (recognize, evaluate) passes with
//! [`recognizer::Recognizer`] and [`value::Evaluator`]. [`lexer::LexerDriver`]
//! layers LATM tokenization on top of the recognizer; [`progress`]
//! reports Earley-item state for debugging.
pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod grammar;
mod kernel;
pub mod lexer;
pub mod logger;
pub mod progress;
pub mod recognizer;
pub mod stack;
pub mod value;

pub use config::{EvaluatorOptions, GrammarOptions, LexerOptions, RecognizerOptions, RuleOptions, SymbolOptions};
pub use error::{EvaluatorRejection, MarpaError, MarpaResult};
pub use event::{EventKind, EventKindSet, EventRecord};
pub use grammar::{Grammar, RuleId, SymbolId};
pub use lexer::LexerDriver;
pub use logger::{LogLevel, Logger, Sink};
pub use progress::ProgressItem;
pub use recognizer::Recognizer;
pub use stack::{StackOptions, TypedStack};
pub use value::{Evaluator, ResultAction, ValueStep};
