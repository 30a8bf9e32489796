//! Generic page of results returned by paginated repository queries.

use crate::model::api::{DataDto, PageMetaDto};

/// One page of items plus the numbers needed to build pagination controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        Self {
            items,
            total,
            page,
            per_page,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.per_page > 0 {
            self.total.div_ceil(self.per_page)
        } else {
            0
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }

    /// Like `map`, stopping at the first conversion error.
    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let items = self.items.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            items,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        })
    }

    /// Wraps the page into the `{ data, meta }` response envelope.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> DataDto<Vec<D>> {
        let meta = PageMetaDto {
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages(),
        };

        DataDto::paginated(self.items.into_iter().map(f).collect(), meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_total_pages_up() {
        assert_eq!(Page::<()>::new(vec![], 41, 0, 20).total_pages(), 3);
        assert_eq!(Page::<()>::new(vec![], 40, 0, 20).total_pages(), 2);
        assert_eq!(Page::<()>::new(vec![], 0, 0, 20).total_pages(), 0);
    }

    #[test]
    fn builds_envelope_meta() {
        let dto = Page::new(vec![1, 2], 7, 1, 2).into_dto(|n| n * 10);

        assert_eq!(dto.data, vec![10, 20]);
        let meta = dto.meta.unwrap();
        assert_eq!(meta.total, 7);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.per_page, 2);
        assert_eq!(meta.total_pages, 4);
    }
}
