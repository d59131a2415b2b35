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

//! Collected fees in arrival order, viewable oldest first or newest
//! first for reporting.

use park_alloc_core::money::Money;

#[derive(Debug, Clone, Default)]
pub struct RevenueLog {
    fees: Vec<Money>,
}

impl RevenueLog {
    pub fn new() -> Self {
        Self { fees: Vec::new() }
    }

    pub fn push(&mut self, fee: Money) {
        self.fees.push(fee);
    }

    pub fn len(&self) -> usize {
        self.fees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }

    /// Oldest collected fee first.
    pub fn iter_fifo(&self) -> impl Iterator<Item = Money> + '_ {
        self.fees.iter().copied()
    }

    /// Most recently collected fee first.
    pub fn iter_lifo(&self) -> impl Iterator<Item = Money> + '_ {
        self.fees.iter().rev().copied()
    }

    pub fn total(&self) -> Money {
        self.fees.iter().copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orderings_and_total() {
        let mut log = RevenueLog::new();
        for fee in [5.0, 8.0, 11.0] {
            log.push(Money::new(fee));
        }
        let fifo: Vec<Money> = log.iter_fifo().collect();
        let lifo: Vec<Money> = log.iter_lifo().collect();
        assert_eq!(fifo, vec![Money::new(5.0), Money::new(8.0), Money::new(11.0)]);
        assert_eq!(lifo, vec![Money::new(11.0), Money::new(8.0), Money::new(5.0)]);
        assert_eq!(log.total(), Money::new(24.0));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_empty_log() {
        let log = RevenueLog::new();
        assert!(log.is_empty());
        assert_eq!(log.total(), Money::new(0.0));
    }
}
