//! Flat storage for the knapsack dynamic programme.

/// Best achievable benefit for every (item prefix, time used, cost used).
///
/// Cells live in one buffer addressed by `i * T * C + t * C + c`, where `T`
/// and `C` are the number of time and cost slots.
#[derive(Debug, Clone)]
pub(crate) struct KnapsackTable {
    cells: Vec<f64>,
    time_slots: usize,
    cost_slots: usize,
}

impl KnapsackTable {
    /// Allocate a zeroed table, or `None` when the size overflows `usize` or
    /// the allocator refuses the request.
    pub(crate) fn zeroed(items: usize, time_slots: usize, cost_slots: usize) -> Option<Self> {
        let len = items
            .checked_add(1)?
            .checked_mul(time_slots)?
            .checked_mul(cost_slots)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).ok()?;
        cells.resize(len, 0.0);
        Some(Self {
            cells,
            time_slots,
            cost_slots,
        })
    }

    pub(crate) const fn time_slots(&self) -> usize {
        self.time_slots
    }

    pub(crate) const fn cost_slots(&self) -> usize {
        self.cost_slots
    }

    const fn offset(&self, item: usize, time: usize, cost: usize) -> usize {
        item * self.time_slots * self.cost_slots + time * self.cost_slots + cost
    }

    /// Value at a cell; out-of-range reads yield zero.
    pub(crate) fn get(&self, item: usize, time: usize, cost: usize) -> f64 {
        if time >= self.time_slots || cost >= self.cost_slots {
            return 0.0;
        }
        self.cells
            .get(self.offset(item, time, cost))
            .copied()
            .unwrap_or_default()
    }

    /// Overwrite a cell; out-of-range writes are ignored.
    pub(crate) fn set(&mut self, item: usize, time: usize, cost: usize, value: f64) {
        if time >= self.time_slots || cost >= self.cost_slots {
            return;
        }
        let offset = self.offset(item, time, cost);
        if let Some(cell) = self.cells.get_mut(offset) {
            *cell = value;
        }
    }
}
