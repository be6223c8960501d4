//! Sortable columns and the header-click toggle rule (pure).

/// A sortable incident table column.
///
/// Matches the set of columns the collection API accepts for `sort_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Incident title.
    Title,
    /// Affected service.
    Service,
    /// Severity classification.
    Severity,
    /// Lifecycle status.
    Status,
    /// Owning person.
    Owner,
    /// Creation timestamp.
    CreatedAt,
    /// Last-modified timestamp.
    UpdatedAt,
}

impl SortColumn {
    /// All sortable columns; the first six are the table's display order.
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Title,
        SortColumn::Service,
        SortColumn::Severity,
        SortColumn::Status,
        SortColumn::Owner,
        SortColumn::CreatedAt,
        SortColumn::UpdatedAt,
    ];

    /// Wire value for the `sort_by` request parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SortColumn::Title => "title",
            SortColumn::Service => "service",
            SortColumn::Severity => "severity",
            SortColumn::Status => "status",
            SortColumn::Owner => "owner",
            SortColumn::CreatedAt => "createdAt",
            SortColumn::UpdatedAt => "updatedAt",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Wire value for the `order` request parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// A complete sort specification: which column, which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Column being sorted on.
    pub column: SortColumn,
    /// Direction of the sort.
    pub order: SortOrder,
}

impl Default for SortSpec {
    /// Newest incidents first.
    fn default() -> Self {
        Self {
            column: SortColumn::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

/// Compute the next sort state for a header activation.
///
/// Activating the column already sorted on flips the direction; activating
/// any other column sorts it ascending.
pub fn next_sort(current: SortSpec, clicked: SortColumn) -> SortSpec {
    if clicked == current.column {
        SortSpec {
            column: clicked,
            order: current.order.flipped(),
        }
    } else {
        SortSpec {
            column: clicked,
            order: SortOrder::Asc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_column_flips_order() {
        let current = SortSpec {
            column: SortColumn::Title,
            order: SortOrder::Asc,
        };
        let next = next_sort(current, SortColumn::Title);
        assert_eq!(next.column, SortColumn::Title);
        assert_eq!(next.order, SortOrder::Desc);

        let again = next_sort(next, SortColumn::Title);
        assert_eq!(again.order, SortOrder::Asc);
    }

    #[test]
    fn different_column_starts_ascending() {
        let current = SortSpec {
            column: SortColumn::Title,
            order: SortOrder::Desc,
        };
        let next = next_sort(current, SortColumn::Severity);
        assert_eq!(next.column, SortColumn::Severity);
        assert_eq!(next.order, SortOrder::Asc);
    }

    #[test]
    fn default_sort_is_created_at_descending() {
        let spec = SortSpec::default();
        assert_eq!(spec.column, SortColumn::CreatedAt);
        assert_eq!(spec.order, SortOrder::Desc);
    }

    #[test]
    fn params_match_api_contract() {
        assert_eq!(SortColumn::CreatedAt.as_param(), "createdAt");
        assert_eq!(SortColumn::UpdatedAt.as_param(), "updatedAt");
        assert_eq!(SortColumn::Owner.as_param(), "owner");
        assert_eq!(SortOrder::Asc.as_param(), "asc");
        assert_eq!(SortOrder::Desc.as_param(), "desc");
    }
}
