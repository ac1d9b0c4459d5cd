use serde::Serialize;

/// Envelope the engine fills in. Implement it on your own type to carry extra
/// fields alongside the pagination metadata.
pub trait PageSetter<D> {
    fn set_current_page(&mut self, current_page: u64);
    fn set_per_page(&mut self, per_page: u64);
    fn set_from(&mut self, from: u64);
    fn set_to(&mut self, to: u64);
    fn set_total(&mut self, total: u64);
    fn set_last_page(&mut self, last_page: u64);
    fn set_data(&mut self, data: Vec<D>);
    fn data(&self) -> &[D];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page<D> {
    pub current_page: u64,
    pub per_page: u64,
    pub from: u64,
    pub to: u64,
    pub total: u64,
    pub last_page: u64,
    pub data: Vec<D>,
}

impl<D> Default for Page<D> {
    fn default() -> Self {
        Self {
            current_page: 0,
            per_page: 0,
            from: 0,
            to: 0,
            total: 0,
            last_page: 0,
            data: Vec::new(),
        }
    }
}

impl<D> Page<D> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(D) -> U,
    {
        Page {
            current_page: self.current_page,
            per_page: self.per_page,
            from: self.from,
            to: self.to,
            total: self.total,
            last_page: self.last_page,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}

impl<D> PageSetter<D> for Page<D> {
    fn set_current_page(&mut self, current_page: u64) {
        self.current_page = current_page;
    }

    fn set_per_page(&mut self, per_page: u64) {
        self.per_page = per_page;
    }

    fn set_from(&mut self, from: u64) {
        self.from = from;
    }

    fn set_to(&mut self, to: u64) {
        self.to = to;
    }

    fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    fn set_last_page(&mut self, last_page: u64) {
        self.last_page = last_page;
    }

    fn set_data(&mut self, data: Vec<D>) {
        self.data = data;
    }

    fn data(&self) -> &[D] {
        &self.data
    }
}

/// `ceil(total / per_page)`, 0 when there is nothing to page through.
pub fn last_page(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page.max(1))
}
