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

//! # Allocation Policy
//!
//! Best-fit selection over the proximity-ordered spot collection. "Best"
//! means the first spot in the current ordering that is both available and
//! size-compatible with the requesting vehicle class; the scan never looks
//! past the first hit. An empty result is a normal outcome ("no
//! availability"), not an error.

use park_alloc_model::{
    id::SpotId,
    spot::{Spot, VehicleClass},
};

/// First available, compatible spot in the given order, if any.
pub fn find_best_fit(spots_by_proximity: &[Spot], class: VehicleClass) -> Option<SpotId> {
    compatible_available(spots_by_proximity, class)
        .next()
        .map(Spot::id)
}

/// All available, compatible spots in the given order.
pub fn compatible_available(
    spots_by_proximity: &[Spot],
    class: VehicleClass,
) -> impl Iterator<Item = &Spot> {
    spots_by_proximity
        .iter()
        .filter(move |spot| spot.is_available() && class.fits(spot.size()))
}
