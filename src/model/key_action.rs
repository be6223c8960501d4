//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row navigation
    /// Move the table selection up one row. Default: k/↑
    RowUp,
    /// Move the table selection down one row. Default: j/↓
    RowDown,
    /// Open the detail view for the selected row. Default: Enter
    OpenDetail,

    // Pagination
    /// Go to the next page. Default: n/→
    NextPage,
    /// Go to the previous page. Default: p/←
    PrevPage,
    /// Jump to the first page. Default: g
    FirstPage,
    /// Jump to the last page. Default: G
    LastPage,

    // Filters and search
    /// Activate the search input. Default: /
    StartSearch,
    /// Cycle the severity filter: none → SEV1 → ... → SEV4 → none. Default: v
    CycleSeverity,
    /// Cycle the status filter: none → OPEN → MITIGATED → RESOLVED → none. Default: b
    CycleStatus,
    /// Clear search, filters, and sort back to defaults. Default: c
    ResetFilters,

    // Sorting
    /// Toggle sort on a table column by index (0-based). Default: 1-6
    SortColumn(usize),

    // Misc
    /// Re-issue the current query. Default: r
    Reload,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Leave the current view (detail → list) or quit from the list. Default: q
    Quit,
}
