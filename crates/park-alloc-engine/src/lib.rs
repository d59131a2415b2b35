// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Parking Allocation Engine (`park-alloc-engine`)
//!
//! The allocation core: a height-balanced spot index with O(log n) point
//! lookups, a stable proximity ordering of the spot collection, a best-fit
//! allocation policy, and the reservation lifecycle that turns elapsed
//! holding time into a fee.
//!
//! - [`index::SpotIndex`]: AVL tree keyed by spot identifier, backed by an
//!   arena of indexed nodes.
//! - [`proximity::sort_by_proximity`]: stable merge sort by distance from
//!   the entrance, recomputed after every structural change to the lot.
//! - [`policy::find_best_fit`]: first available, size-compatible spot in
//!   the current proximity order.
//! - [`ledger::ReservationLedger`]: active driver-to-spot bindings plus an
//!   append-only activity log; fee computation on release.
//! - [`engine::ParkingEngine`]: the single owning facade, with role-scoped
//!   read-only ([`engine::Listing`]) and mutating ([`engine::Allocator`])
//!   views.
//! - [`snapshot`]: the line-based persistence codec at the storage boundary.
//!
//! The engine is single-threaded and synchronous; every operation runs to
//! completion before the next is admitted.

pub mod engine;
pub mod index;
pub mod ledger;
pub mod policy;
pub mod proximity;
pub mod snapshot;
