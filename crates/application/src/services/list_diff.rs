//! Minimal row diff between two result lists
//!
//! Rows are matched by [`SearchResult::is_same_item`] along a longest common
//! subsequence; matched rows whose content differs become
//! [`ListChange::Update`], everything else is a removal or an insertion.

use domain::entities::SearchResult;

use crate::ports::ListChange;

/// Compute the changes turning `old` into `new`
///
/// Applying the returned changes in order to `old` (see [`apply_changes`])
/// yields `new`.
#[must_use]
pub fn diff(old: &[SearchResult], new: &[SearchResult]) -> Vec<ListChange> {
    let lcs = lcs_table(old, new);
    let mut changes = Vec::new();
    let (mut i, mut j) = (0, 0);

    // The working list is always new[..j] followed by old[i..], so the
    // position of the next change is `j`.
    while i < old.len() && j < new.len() {
        if old[i].is_same_item(&new[j]) {
            if old[i] != new[j] {
                changes.push(ListChange::Update {
                    index: j,
                    item: new[j].clone(),
                });
            }
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            changes.push(ListChange::Remove { index: j });
            i += 1;
        } else {
            changes.push(ListChange::Insert {
                index: j,
                item: new[j].clone(),
            });
            j += 1;
        }
    }

    for _ in i..old.len() {
        changes.push(ListChange::Remove { index: j });
    }
    for (index, item) in new.iter().enumerate().skip(j) {
        changes.push(ListChange::Insert {
            index,
            item: item.clone(),
        });
    }

    changes
}

/// Apply `changes` in order to `list`
///
/// Out-of-range indices are ignored.
pub fn apply_changes(list: &mut Vec<SearchResult>, changes: &[ListChange]) {
    for change in changes {
        match change {
            ListChange::Insert { index, item } if *index <= list.len() => {
                list.insert(*index, item.clone());
            },
            ListChange::Remove { index } if *index < list.len() => {
                list.remove(*index);
            },
            ListChange::Update { index, item } if *index < list.len() => {
                list[*index] = item.clone();
            },
            _ => {},
        }
    }
}

/// `table[i][j]` is the LCS length of `old[i..]` and `new[j..]`
fn lcs_table(old: &[SearchResult], new: &[SearchResult]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0; new.len() + 1]; old.len() + 1];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            table[i][j] = if old[i].is_same_item(&new[j]) {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }
    table
}
