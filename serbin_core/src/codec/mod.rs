//! # Serialization format
//!
//! A stream is the back-to-back concatenation of the serialized values, in the
//! order they were written. There is no header, no type tag and no checksum;
//! the reader must request the same static types, in the same order.
//!
//! All multi-byte integers, including length prefixes, are written in the
//! host's native byte order and width. A stream written on a host with a
//! different pointer width or endianness will not read back correctly.
//!
//! ```text
//! primitive (u8..u128, i8..i128, usize, isize, f32, f64) {
//!     body:       [u8; size_of::<T>()],   // raw host layout
//! }
//!
//! bool or presence flag {
//!     flag:       u8,                     // 0 or 1
//! }
//!
//! char {
//!     body:       u32,
//! }
//!
//! str or String {
//!     len:        usize,
//!     body:       [u8; len],              // UTF-8
//! }
//!
//! Vec<T>, VecDeque<T>, LinkedList<T>, [T] {
//!     len:        usize,
//!     member_0:   T,
//!     ...
//! }
//!
//! [T; N] {
//!     // (Notice, no len here.)
//!     member_0:   T,
//!     ...
//!     member_n-1: T,
//! }
//!
//! HashSet<T> or BTreeSet<T> {
//!     len:        usize,
//!     member_0:   T,                      // in the set's own iteration order
//!     ...
//! }
//!
//! HashMap<K, V> or BTreeMap<K, V> {
//!     len:        usize,
//!     key_0:      K,
//!     val_0:      V,
//!     ...
//! }
//!
//! (A, B, ...) {
//!     slot_0:     A,
//!     slot_1:     B,
//!     ...
//! }
//!
//! Option<T> {
//!     flag:       u8,
//!     body:       T,                      // only if flag == 1
//! }
//!
//! Box<T>, Rc<T>, Arc<T> {
//!     body:       T,                      // the pointee, by value
//! }
//! ```
//!
//! A nullable owning pointer is an `Option<Box<T>>` (or `Rc`, `Arc`), and thus
//! gets a presence flag. Sharing between pointers is not recorded: every
//! deserialized `Rc` or `Arc` is a fresh, unshared allocation.

mod reader;
mod solo;
mod wire;
mod writer;

pub use reader::*;
pub use solo::*;
pub use wire::*;
pub use writer::*;

/// Buffer capacity of the sink and source wrappers, unless given explicitly.
pub const DEFAULT_BUF_CAPACITY: usize = 8 * 1024;
