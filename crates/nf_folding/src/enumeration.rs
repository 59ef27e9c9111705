//! Bounded breadth-first enumeration of optimal structures.
//!
//! A search state is a set of *active points* (sub-ranges [i, j] still
//! to be resolved) together with the partial structures that reach it.
//! States with the same active points are merged, so identical prefixes
//! are shared instead of being copied along every path.
//!
//! Partial structures live in a `StructureArena`: each one is stored
//! once, under a stable id, with a count of the states referring to it.
//! The arena never holds more than `max_foldings` distinct structures;
//! a new structure that does not fit is dropped together with the path
//! that would have produced it. Every structure still alive when the
//! search runs out of states is complete and optimal.
//!
//! The number of pending states is bounded too. Once it reaches
//! `4 * max_foldings`, each state follows only its first matching move
//! (j unpaired, i unpaired, pair, then the smallest split), the same
//! choice `find_in_depth` makes. Every path still ends in an optimal
//! structure, but when fewer than `max_foldings` structures exist some
//! of them may be missed.
//!
//! States are processed in the order of their active point sets (view
//! order, see `ActivePoint`), which makes the result reproducible.

use std::cmp::Ordering;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use ahash::AHashMap;
use log::debug;
use log::trace;
use nf_structure::ConnectPair;
use nf_structure::SecondaryStructure;
use nf_structure::NAIDX;

use crate::EnergyMatrix;

type PartId = usize;

/// Pending states allowed per requested structure before the search
/// narrows to one move per state.
const PENDING_STATES_PER_FOLDING: usize = 4;

#[derive(Debug)]
struct PartialStructure {
    structure: SecondaryStructure,
    refs: usize,
}

/// Reference-counted partial structures, at most `max_foldings` alive.
#[derive(Debug)]
struct StructureArena {
    slots: Vec<Option<PartialStructure>>,
    free: Vec<PartId>,
    lookup: AHashMap<SecondaryStructure, PartId>,
    max_foldings: usize,
    saturated: bool,
}

impl StructureArena {
    fn new(max_foldings: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            lookup: AHashMap::default(),
            max_foldings,
            saturated: false,
        }
    }

    /// Number of distinct structures alive.
    fn live(&self) -> usize {
        self.lookup.len()
    }

    fn part_mut(&mut self, id: PartId) -> &mut PartialStructure {
        match self.slots[id].as_mut() {
            Some(part) => part,
            None => unreachable!("partial structure {id} used after release"),
        }
    }

    /// Take a reference to `structure`, storing it if it is new and fits.
    fn admit(&mut self, structure: SecondaryStructure) -> Option<PartId> {
        if let Some(&id) = self.lookup.get(&structure) {
            self.retain(id);
            return Some(id);
        }
        if self.live() >= self.max_foldings {
            if !self.saturated {
                debug!("Structure limit of {} reached, dropping new structures.", self.max_foldings);
                self.saturated = true;
            }
            return None;
        }
        let part = PartialStructure { structure: structure.clone(), refs: 1 };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id] = Some(part);
                id
            }
            None => {
                self.slots.push(Some(part));
                self.slots.len() - 1
            }
        };
        self.lookup.insert(structure, id);
        Some(id)
    }

    fn retain(&mut self, id: PartId) {
        self.part_mut(id).refs += 1;
    }

    /// Drop one reference; the structure is freed with its last one.
    fn release(&mut self, id: PartId) {
        let part = self.part_mut(id);
        part.refs -= 1;
        if part.refs == 0 {
            if let Some(part) = self.slots[id].take() {
                self.lookup.remove(&part.structure);
            }
            self.free.push(id);
        }
    }

    /// Trade one reference to `id` for a reference to `id` plus `pair`.
    fn extend(&mut self, id: PartId, pair: ConnectPair) -> Option<PartId> {
        let mut structure = self.part_mut(id).structure.clone();
        structure.add_pair(pair);
        self.release(id);
        self.admit(structure)
    }

    fn into_structures(self) -> BTreeSet<SecondaryStructure> {
        self.slots
            .into_iter()
            .flatten()
            .map(|part| part.structure)
            .collect()
    }
}

/// A sub-range [i, j] still to be resolved. Empty when i > j.
///
/// Ordered like `ConnectPair`: (0,15) < (0,14) < (1,16).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActivePoint {
    i: usize,
    j: usize,
}

impl ActivePoint {
    fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

impl Ord for ActivePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.i.cmp(&other.i).then_with(|| other.j.cmp(&self.j))
    }
}

impl PartialOrd for ActivePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

type ActivePoints = BTreeSet<ActivePoint>;

/// Ways to resolve the first active point, in priority order.
#[derive(Debug, Clone, Copy)]
enum Move {
    /// j or i unpaired.
    Shrink(ActivePoint),
    Pair,
    Split(ActivePoint, ActivePoint),
}

/// Pending states, keyed (and ordered) by their active points.
#[derive(Debug, Default)]
struct FoldStates {
    states: BTreeMap<ActivePoints, BTreeSet<PartId>>,
}

impl FoldStates {
    /// Insert a state, or merge its parts into the state with the same
    /// active points. A part already known there loses the duplicate
    /// reference.
    fn add_or_join(&mut self, points: ActivePoints, parts: BTreeSet<PartId>, arena: &mut StructureArena) {
        match self.states.entry(points) {
            Entry::Vacant(e) => {
                e.insert(parts);
            }
            Entry::Occupied(mut e) => {
                let known = e.get_mut();
                for id in parts {
                    if !known.insert(id) {
                        arena.release(id);
                    }
                }
            }
        }
    }

    /// Spawn a successor sharing `parts` (one new reference each).
    fn add_move(
        &mut self,
        points: &ActivePoints,
        new_points: &[ActivePoint],
        parts: &BTreeSet<PartId>,
        arena: &mut StructureArena,
    ) {
        let mut next = points.clone();
        next.extend(new_points.iter().copied());
        for &id in parts {
            arena.retain(id);
        }
        self.add_or_join(next, parts.clone(), arena);
    }

    fn len(&self) -> usize {
        self.states.len()
    }

    fn pop_first(&mut self) -> Option<(ActivePoints, BTreeSet<PartId>)> {
        self.states.pop_first()
    }
}

/// Up to `max_foldings` distinct structures of energy `matrix.optimum()`.
///
/// From an active point (i, j) with `M[i][j] != 0` every matching move
/// is followed: j unpaired, i unpaired, (i, j) paired, and each split
/// `i < k < j - 1`. While too many states are pending, only the first
/// of these is followed. With `max_foldings = 0` nothing is enumerated; an
/// empty index space yields the empty structure.
pub fn enumerate_structures(matrix: &EnergyMatrix, max_foldings: usize) -> BTreeSet<SecondaryStructure> {
    if max_foldings == 0 {
        debug!("Structure enumeration disabled (max_foldings = 0).");
        return BTreeSet::new();
    }
    let mut arena = StructureArena::new(max_foldings);
    let Some(start) = arena.admit(SecondaryStructure::new()) else {
        return BTreeSet::new();
    };
    if matrix.is_empty() {
        return arena.into_structures();
    }

    debug!("Enumerating up to {} structures over {} positions.", max_foldings, matrix.len());
    let mut states = FoldStates::default();
    states.add_or_join(
        ActivePoints::from([ActivePoint::new(0, matrix.len() - 1)]),
        BTreeSet::from([start]),
        &mut arena,
    );

    let max_pending = max_foldings.saturating_mul(PENDING_STATES_PER_FOLDING);
    let mut narrowed = false;
    let mut visited: usize = 0;
    while let Some((mut points, parts)) = states.pop_first() {
        visited += 1;
        let Some(ActivePoint { i, j }) = points.pop_first() else {
            continue;
        };
        let current = matrix.get(i, j);
        trace!(
            "({i},{j}) = {current}, {} more points, {} parts, {} alive",
            points.len(),
            parts.len(),
            arena.live()
        );

        if current == 0 {
            // With no points left the state is finished and its parts
            // keep their references until the end.
            if !points.is_empty() {
                states.add_or_join(points, parts, &mut arena);
            }
            continue;
        }

        let mut moves: Vec<Move> = Vec::new();
        if current == matrix.get(i, j - 1) {
            moves.push(Move::Shrink(ActivePoint::new(i, j - 1)));
        }
        if current == matrix.get(i + 1, j) {
            moves.push(Move::Shrink(ActivePoint::new(i + 1, j)));
        }
        if matrix.paired_value(i, j) == Some(current) {
            moves.push(Move::Pair);
        }
        for k in i + 1..j - 1 {
            if current == matrix.get(i, k).saturating_add(matrix.get(k + 1, j)) {
                moves.push(Move::Split(ActivePoint::new(i, k), ActivePoint::new(k + 1, j)));
            }
        }
        if states.len() >= max_pending {
            if !narrowed {
                debug!("{} pending states, following one move per state from now on.", states.len());
                narrowed = true;
            }
            moves.truncate(1);
        }

        let mut pairs = false;
        for mv in moves {
            match mv {
                Move::Shrink(p) => states.add_move(&points, &[p], &parts, &mut arena),
                Move::Split(a, b) => states.add_move(&points, &[a, b], &parts, &mut arena),
                Move::Pair => pairs = true,
            }
        }

        if pairs {
            // The pairing move consumes this state's own references.
            let pair = ConnectPair::new(i as NAIDX, j as NAIDX);
            let extended: BTreeSet<PartId> = parts
                .into_iter()
                .filter_map(|id| arena.extend(id, pair))
                .collect();
            if !extended.is_empty() {
                points.insert(ActivePoint::new(i + 1, j - 1));
                states.add_or_join(points, extended, &mut arena);
            }
        } else {
            for id in parts {
                arena.release(id);
            }
        }
    }

    let structures = arena.into_structures();
    debug!("Visited {} states, kept {} structures.", visited, structures.len());
    structures
}
