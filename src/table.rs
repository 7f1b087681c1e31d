use serde::Serialize;
use tracing::warn;

use crate::i18n::TableHeader;
use crate::types::LeagueTableRow;

/// Rows shown around the team: two above and two below when possible.
pub const WINDOW_SIZE: usize = 5;

/// Inclusive 1-based rank range to display and the 1-based row to highlight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub first: usize,
    pub last: usize,
    pub highlighted: Option<usize>,
}

impl Window {
    /// Positions the window for a table of `len` rows where the team sits at
    /// `position` (1-based), or `None` when it is not in the table.
    ///
    /// The window is `min(size, len)` rows. It is centered on the team and
    /// pinned to the top or bottom edge when centering would run past it.
    /// A missing team shows the top rows with nothing highlighted.
    pub fn around(len: usize, position: Option<usize>, size: usize) -> Self {
        let n = size.min(len);
        if n == 0 {
            return Self {
                first: 1,
                last: 0,
                highlighted: None,
            };
        }
        let above = n / 2;
        let below = (n - 1) / 2;

        match position {
            Some(r) if r <= above => Self {
                first: 1,
                last: n,
                highlighted: Some(r),
            },
            Some(r) if r > len - below => {
                let first = len + 1 - n;
                Self {
                    first,
                    last: len,
                    highlighted: Some(r - first + 1),
                }
            }
            Some(r) => Self {
                first: r - above,
                last: r + below,
                highlighted: Some(n - below),
            },
            None => Self {
                first: 1,
                last: n,
                highlighted: None,
            },
        }
    }

    pub fn len(&self) -> usize {
        (self.last + 1).saturating_sub(self.first)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub rank: usize,
    pub team_id: u32,
    pub name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: i32,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DisplayTable {
    pub header: &'static TableHeader,
    pub rows: Vec<DisplayRow>,
    /// 1-based index into `rows`.
    pub highlighted: Option<usize>,
}

impl DisplayTable {
    /// Slices the league table around `team_id`.
    pub fn build(
        table: &[LeagueTableRow],
        team_id: u32,
        size: usize,
        header: &'static TableHeader,
    ) -> Self {
        let position = table.iter().position(|row| row.id == team_id).map(|i| i + 1);
        if position.is_none() && !table.is_empty() {
            warn!(team_id, "team not found in the league table, showing top teams");
        }

        let window = Window::around(table.len(), position, size);
        let rows = if window.is_empty() {
            Vec::new()
        } else {
            table[window.first - 1..window.last]
                .iter()
                .zip(window.first..)
                .map(|(row, rank)| DisplayRow {
                    rank,
                    team_id: row.id,
                    name: row.name.clone(),
                    played: row.played,
                    wins: row.wins,
                    draws: row.draws,
                    losses: row.losses,
                    points: row.pts,
                })
                .collect()
        };

        Self {
            header,
            rows,
            highlighted: window.highlighted,
        }
    }

    pub fn highlighted_row(&self) -> Option<&DisplayRow> {
        self.highlighted.and_then(|i| self.rows.get(i - 1))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::i18n::EN;

    fn league(len: u32) -> Vec<LeagueTableRow> {
        (1..=len)
            .map(|idx| LeagueTableRow {
                id: 1000 + idx,
                name: format!("Team {idx}"),
                idx,
                played: 30,
                wins: 30 - idx.min(30),
                draws: 0,
                losses: idx.min(30),
                pts: 90 - idx as i32 * 3,
            })
            .collect()
    }

    fn ranks(table: &DisplayTable) -> Vec<usize> {
        table.rows.iter().map(|row| row.rank).collect()
    }

    #[test]
    fn test_every_position_in_a_full_table() {
        let rows = league(20);
        for r in 1..=20u32 {
            let table = DisplayTable::build(&rows, 1000 + r, WINDOW_SIZE, &EN.table_header);
            assert_eq!(table.rows.len(), 5, "rank {r}");
            let highlighted = table.highlighted_row().unwrap();
            assert_eq!(highlighted.team_id, 1000 + r);
            assert_eq!(highlighted.rank, r as usize);
            assert!(table.rows.iter().all(|row| (1..=20).contains(&row.rank)));
        }
    }

    #[test]
    fn test_top_edge_starts_at_first_rank() {
        let rows = league(20);
        for r in [1, 2] {
            let table = DisplayTable::build(&rows, 1000 + r, WINDOW_SIZE, &EN.table_header);
            assert_eq!(ranks(&table), vec![1, 2, 3, 4, 5]);
            assert_eq!(table.highlighted, Some(r as usize));
        }
    }

    #[test]
    fn test_bottom_edge_ends_at_last_rank() {
        let rows = league(20);
        for (r, highlighted) in [(19, 4), (20, 5)] {
            let table = DisplayTable::build(&rows, 1000 + r, WINDOW_SIZE, &EN.table_header);
            assert_eq!(ranks(&table), vec![16, 17, 18, 19, 20]);
            assert_eq!(table.highlighted, Some(highlighted));
        }
    }

    #[test]
    fn test_middle_is_centered() {
        let table = DisplayTable::build(&league(20), 1010, WINDOW_SIZE, &EN.table_header);
        assert_eq!(ranks(&table), vec![8, 9, 10, 11, 12]);
        assert_eq!(table.highlighted, Some(3));
        assert_eq!(table.rows[2].name, "Team 10");
        assert_eq!(table.rows[2].points, 60);
    }

    #[test]
    fn test_team_not_found() {
        let table = DisplayTable::build(&league(20), 42, WINDOW_SIZE, &EN.table_header);
        assert_eq!(ranks(&table), vec![1, 2, 3, 4, 5]);
        assert_eq!(table.highlighted, None);
        assert!(table.highlighted_row().is_none());
    }

    #[test]
    fn test_short_tables() {
        for len in 1..5u32 {
            let rows = league(len);
            for r in 1..=len {
                let table = DisplayTable::build(&rows, 1000 + r, WINDOW_SIZE, &EN.table_header);
                assert_eq!(table.rows.len(), len as usize);
                assert_eq!(ranks(&table), (1..=len as usize).collect::<Vec<_>>());
                assert_eq!(table.highlighted, Some(r as usize));
            }
            let missing = DisplayTable::build(&rows, 42, WINDOW_SIZE, &EN.table_header);
            assert_eq!(missing.rows.len(), len as usize);
            assert_eq!(missing.highlighted, None);
        }
    }

    #[test]
    fn test_empty_table() {
        let table = DisplayTable::build(&[], 1001, WINDOW_SIZE, &EN.table_header);
        assert!(table.rows.is_empty());
        assert_eq!(table.highlighted, None);
    }

    #[test]
    fn test_exactly_window_sized_table() {
        let rows = league(5);
        let table = DisplayTable::build(&rows, 1004, WINDOW_SIZE, &EN.table_header);
        assert_eq!(ranks(&table), vec![1, 2, 3, 4, 5]);
        assert_eq!(table.highlighted, Some(4));
    }

    #[test]
    fn test_window_bounds() {
        assert_eq!(
            Window::around(20, Some(3), 5),
            Window {
                first: 1,
                last: 5,
                highlighted: Some(3)
            }
        );
        assert_eq!(
            Window::around(20, Some(18), 5),
            Window {
                first: 16,
                last: 20,
                highlighted: Some(3)
            }
        );
        assert_eq!(Window::around(0, None, 5).len(), 0);
        assert_eq!(Window::around(4, Some(4), 5).len(), 4);
    }
}
