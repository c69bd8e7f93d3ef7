//! Bounds-checked positional edits shared by the index-addressed containers.
//!
//! All functions leave `data` untouched when the index is rejected.

use crate::error::OutOfRange;
use core::mem;

/// Replace the element at `index`, returning the previous one.
/// Valid for `index < len`.
pub(crate) fn set_at<T>(data: &mut [T], index: usize, value: T) -> Result<T, OutOfRange<T>> {
    let len = data.len();
    match data.get_mut(index) {
        Some(slot) => Ok(mem::replace(slot, value)),
        None => Err(OutOfRange::new(index, len, value)),
    }
}

/// Insert at `index`, shifting later elements right by one.
/// Valid for `index <= len`; `index == len` appends.
pub(crate) fn insert_at<T>(data: &mut Vec<T>, index: usize, value: T) -> Result<(), OutOfRange<T>> {
    if index > data.len() {
        return Err(OutOfRange::new(index, data.len(), value));
    }
    data.insert(index, value);
    Ok(())
}

/// Remove the element at `index`, shifting later elements left by one.
/// Valid for `index < len`.
pub(crate) fn remove_at<T>(data: &mut Vec<T>, index: usize) -> Option<T> {
    if index < data.len() {
        Some(data.remove(index))
    } else {
        None
    }
}
