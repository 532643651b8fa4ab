use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::{Result, TopologyError};
use crate::topology::{CellId, CellStore, Chain, LinkAxis};

/// Partitions `members` into chains linked above and below.
///
/// Each chain runs from its top cell (no `above` neighbor) down through
/// `below` links. Chains are returned in discovery order, i.e. in the order
/// their first-seen member appears in `members`.
///
/// # Errors
///
/// Returns an error if a cell handle is stale, if an upward walk never
/// reaches a top cell (an above/below cycle), if a cell is collected twice,
/// or if the chains do not cover exactly the members.
pub fn decompose_above_below(members: &[CellId], cells: &CellStore) -> Result<Vec<Chain>> {
    let axis = LinkAxis::AboveBelow;
    let max_steps = cells.len();
    let mut visited: HashSet<CellId> = HashSet::with_capacity(members.len());
    let mut chains = Vec::new();

    for &start in members {
        if visited.contains(&start) {
            continue;
        }

        // Search above for the top cell.
        let mut top = start;
        let mut steps = 0;
        while let Some(above) = cells.get(top)?.above {
            steps += 1;
            if steps > max_steps {
                warn!(?start, "above/below walk does not terminate");
                return Err(TopologyError::LinkCycle { axis, start }.into());
            }
            top = above;
        }

        // Collect the top cell and all cells below it.
        let mut chain = Vec::new();
        let mut next = Some(top);
        while let Some(cell) = next {
            visit(&mut visited, axis, cell)?;
            chain.push(cell);
            next = cells.get(cell)?.below;
        }

        chains.push(Chain {
            axis,
            cells: chain,
            is_closed: false,
        });
    }

    check_coverage(axis, visited.len(), members.len())?;
    debug!(%axis, chains = chains.len(), cells = visited.len(), "decomposed skin");
    Ok(chains)
}

/// Partitions `members` into chains linked left and right.
///
/// Left/right links may form closed loops. A walk to the left stops at a
/// cell without a `left` neighbor, or just before returning to the cell it
/// started from; the cell reached is the chain's anchor. The chain then runs
/// right from the anchor until there is no `right` neighbor or the next one
/// is the anchor itself. A chain whose last cell links right to its anchor
/// is closed.
///
/// # Errors
///
/// Returns an error if a cell handle is stale, if a leftward walk never
/// terminates, if any cell would belong to two chains, or if the chains do
/// not cover exactly the members.
pub fn decompose_left_right(members: &[CellId], cells: &CellStore) -> Result<Vec<Chain>> {
    let axis = LinkAxis::LeftRight;
    let max_steps = cells.len();
    let mut visited: HashSet<CellId> = HashSet::with_capacity(members.len());
    let mut chains = Vec::new();

    for &start in members {
        if visited.contains(&start) {
            continue;
        }

        // Search left until there is no left neighbor or it is the start.
        let mut anchor = start;
        let mut steps = 0;
        while let Some(left) = cells.get(anchor)?.left {
            if left == start {
                break;
            }
            steps += 1;
            if steps > max_steps {
                warn!(?start, "left/right walk does not terminate");
                return Err(TopologyError::LinkCycle { axis, start }.into());
            }
            anchor = left;
        }

        // Collect the anchor and cells to its right, stopping at a loop.
        let mut chain = Vec::new();
        let mut last = anchor;
        let mut next = Some(anchor);
        while let Some(cell) = next {
            visit(&mut visited, axis, cell)?;
            chain.push(cell);
            last = cell;
            next = cells.get(cell)?.right.filter(|&right| right != anchor);
        }
        let is_closed = cells.get(last)?.right == Some(anchor);

        chains.push(Chain {
            axis,
            cells: chain,
            is_closed,
        });
    }

    check_coverage(axis, visited.len(), members.len())?;
    check_disjoint(&chains)?;
    debug!(
        %axis,
        chains = chains.len(),
        closed = chains.iter().filter(|c| c.is_closed).count(),
        cells = visited.len(),
        "decomposed skin"
    );
    Ok(chains)
}

/// Checks that no cell appears twice across `chains`.
///
/// # Errors
///
/// Returns [`TopologyError::DuplicateChainCell`] naming the first repeated cell.
pub fn check_disjoint(chains: &[Chain]) -> Result<()> {
    let mut seen = HashSet::new();
    for chain in chains {
        for &cell in &chain.cells {
            visit(&mut seen, chain.axis, cell)?;
        }
    }
    Ok(())
}

fn visit(visited: &mut HashSet<CellId>, axis: LinkAxis, cell: CellId) -> Result<()> {
    if visited.insert(cell) {
        Ok(())
    } else {
        warn!(%axis, ?cell, "cell reached twice");
        Err(TopologyError::DuplicateChainCell { axis, cell }.into())
    }
}

fn check_coverage(axis: LinkAxis, visited: usize, members: usize) -> Result<()> {
    if visited == members {
        Ok(())
    } else {
        warn!(%axis, visited, members, "chains do not cover the skin");
        Err(TopologyError::InconsistentChains {
            axis,
            visited,
            members,
        }
        .into())
    }
}
