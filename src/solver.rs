//! Search strategies for the spaceship puzzle.
//!
//! Four interchangeable algorithms operate over the [`SearchState`] contract:
//! - [`DepthFirst`]: stack-ordered, carries a copied path per frontier entry.
//! - [`MemoDepthFirst`]: same traversal order, but prunes duplicates before
//!   pushing, reconstructs paths through a parent-linked node arena, and keeps
//!   its visited set across calls on the same instance.
//! - [`BreadthFirst`]: level-ordered; minimal action count under uniform costs.
//! - [`CheapestFirst`]: ordered by accumulated path cost (branch and bound).
//! - [`BestFirst`]: ordered by accumulated cost plus a caller-supplied
//!   estimate of the remaining cost.
//!
//! A seeded [`RandomWalk`] baseline is also provided; unlike the strategies
//! above it keeps no visited set and makes no termination promise on inputs
//! where no goal is reachable.
//!
//! Every strategy runs to completion on one thread: it returns `Some(path)`
//! when a goal entry is extracted from the frontier, or `None` once the
//! frontier is exhausted. Frontier and visited set are local to one call,
//! except for `MemoDepthFirst` (see its documentation).
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::engine::{Action, State};
use crate::heuristics;

/// The state-space contract every strategy searches over.
///
/// Implementations must be pure: `successor` may not mutate the receiver, and
/// `legal_actions` must return the same actions in the same order every time
/// it is called on a given state. A state with no legal actions is a dead end,
/// not an error.
pub trait SearchState: Clone {
    /// A move descriptor, opaque to the strategies.
    type Action: Clone;
    /// Canonical identity used for visited-set deduplication. Two states with
    /// equal keys must be interchangeable for the rest of the search.
    type Key: Clone + Eq + Hash;

    /// Returns `true` if this state satisfies the goal condition.
    fn is_goal(&self) -> bool;
    /// Enumerates the legal moves, in a stable order.
    fn legal_actions(&self) -> Vec<Self::Action>;
    /// Returns the state reached by applying `action`.
    fn successor(&self, action: &Self::Action) -> Self;
    /// Returns the non-negative cost of `action`.
    fn action_cost(&self, action: &Self::Action) -> u32;
    /// Returns the deduplication key of this state.
    fn key(&self) -> Self::Key;
}

impl SearchState for State {
    type Action = Action;
    type Key = u64;

    fn is_goal(&self) -> bool {
        self.is_goal_state()
    }

    fn legal_actions(&self) -> Vec<Action> {
        State::legal_actions(self)
    }

    fn successor(&self, action: &Action) -> State {
        State::successor(self, action)
    }

    fn action_cost(&self, action: &Action) -> u32 {
        State::action_cost(self, action)
    }

    fn key(&self) -> u64 {
        State::key(self)
    }
}

/// A path-finding strategy.
///
/// `find_path` returns the actions leading from `start` to a goal state
/// (empty if `start` already is one), or `None` when the whole reachable
/// state space has been examined without finding a goal. Callers must treat
/// `Some(vec![])` and `None` as distinct outcomes.
pub trait PathFinder<S: SearchState> {
    fn find_path(&mut self, start: &S) -> Option<Vec<S::Action>>;
}

/// One expansion record: the action that produced a state and the node of the
/// state it was produced from. The root carries neither.
struct Node<A> {
    action: Option<A>,
    parent: Option<usize>,
}

/// An append-only arena of [`Node`]s.
///
/// Parent links are indices fixed at creation and never reassigned, so the
/// records form a tree rooted at the start state and the backward walk in
/// [`NodeArena::actions_to`] always terminates. Reconstructing a path costs
/// one walk over its depth instead of one path copy per expansion.
struct NodeArena<A> {
    nodes: Vec<Node<A>>,
}

impl<A: Clone> NodeArena<A> {
    fn new() -> Self {
        NodeArena { nodes: Vec::new() }
    }

    /// Adds the root record and returns its index.
    fn root(&mut self) -> usize {
        self.nodes.push(Node {
            action: None,
            parent: None,
        });
        self.nodes.len() - 1
    }

    /// Adds a record for a state reached from `parent` via `action`.
    fn child(&mut self, parent: usize, action: A) -> usize {
        self.nodes.push(Node {
            action: Some(action),
            parent: Some(parent),
        });
        self.nodes.len() - 1
    }

    /// Collects the actions from the root to the node at `index`.
    fn actions_to(&self, index: usize) -> Vec<A> {
        let mut actions = Vec::new();
        let mut current = index;
        while let Node {
            action: Some(action),
            parent: Some(parent),
        } = &self.nodes[current]
        {
            actions.push(action.clone());
            current = *parent;
        }
        actions.reverse();
        actions
    }
}

/// Uninformed depth-first search.
///
/// Frontier entries are `(state, path-so-far)` pairs on a stack; the path is
/// copied on every push. Successors are pushed in reverse enumeration order
/// so that popping from the end explores them in the order `legal_actions`
/// produced them. States are marked visited when popped.
///
/// Returns some valid path, with no length or cost guarantee. Kept alongside
/// [`MemoDepthFirst`] as the straightforward baseline formulation.
pub struct DepthFirst;

impl<S: SearchState> PathFinder<S> for DepthFirst {
    fn find_path(&mut self, start: &S) -> Option<Vec<S::Action>> {
        let mut stack = vec![(start.clone(), Vec::new())];
        let mut visited = HashSet::new();

        while let Some((state, path)) = stack.pop() {
            if state.is_goal() {
                return Some(path);
            }
            if visited.insert(state.key()) {
                for action in state.legal_actions().into_iter().rev() {
                    let next = state.successor(&action);
                    let mut next_path = path.clone();
                    next_path.push(action);
                    stack.push((next, next_path));
                }
            }
        }
        None
    }
}

/// Depth-first search with pre-push pruning and parent-linked paths.
///
/// Traversal order matches [`DepthFirst`], with two changes:
/// - A successor whose key is already in the visited set is dropped before it
///   is pushed, instead of after it is popped.
/// - Frontier entries reference records in a [`NodeArena`]; the action path is
///   materialized only once, when a goal is popped.
///
/// The visited set is an instance field and persists across `find_path`
/// calls on the same instance. A caller reusing one instance gets cross-call
/// deduplication: a start state whose key was expanded by an earlier call is
/// answered with `None` immediately. Construct a fresh instance per call for
/// per-call isolation.
pub struct MemoDepthFirst<S: SearchState> {
    visited: HashSet<S::Key>,
}

impl<S: SearchState> MemoDepthFirst<S> {
    pub fn new() -> Self {
        MemoDepthFirst {
            visited: HashSet::new(),
        }
    }
}

impl<S: SearchState> Default for MemoDepthFirst<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SearchState> PathFinder<S> for MemoDepthFirst<S> {
    fn find_path(&mut self, start: &S) -> Option<Vec<S::Action>> {
        let mut arena = NodeArena::new();
        let root = arena.root();
        let mut stack = vec![(start.clone(), root)];

        while let Some((state, node)) = stack.pop() {
            if state.is_goal() {
                return Some(arena.actions_to(node));
            }
            if self.visited.insert(state.key()) {
                for action in state.legal_actions().into_iter().rev() {
                    let next = state.successor(&action);
                    if !self.visited.contains(&next.key()) {
                        let child = arena.child(node, action);
                        stack.push((next, child));
                    }
                }
            }
        }
        None
    }
}

/// Uninformed breadth-first search.
///
/// Same visited discipline as [`DepthFirst`] (marked when popped), but the
/// frontier is a FIFO queue, so states are expanded in level order and the
/// returned path has minimal action count whenever all costs are equal.
pub struct BreadthFirst;

impl<S: SearchState> PathFinder<S> for BreadthFirst {
    fn find_path(&mut self, start: &S) -> Option<Vec<S::Action>> {
        let mut queue = VecDeque::new();
        queue.push_back((start.clone(), Vec::new()));
        let mut visited = HashSet::new();

        while let Some((state, path)) = queue.pop_front() {
            if state.is_goal() {
                return Some(path);
            }
            if visited.insert(state.key()) {
                for action in state.legal_actions() {
                    let next = state.successor(&action);
                    let mut next_path = path.clone();
                    next_path.push(action);
                    queue.push_back((next, next_path));
                }
            }
        }
        None
    }
}

/// Uniform-cost search (branch and bound).
///
/// Frontier entries carry their accumulated cost. After every expansion round
/// the whole frontier is re-sorted ascending by that cost (stably, so equal
/// costs keep insertion order) and the front entry is extracted next; popped
/// costs are therefore non-decreasing.
///
/// States are marked visited eagerly, the moment they are scheduled. A
/// cheaper route to an already-scheduled state discovered later is dropped,
/// so the returned path is cheapest only with respect to the routes that
/// survive this pruning, not cheapest in general. The eager marking is part
/// of this strategy's contract; switching to marking on extraction would
/// change which paths it returns.
pub struct CheapestFirst;

impl<S: SearchState> PathFinder<S> for CheapestFirst {
    fn find_path(&mut self, start: &S) -> Option<Vec<S::Action>> {
        let mut frontier = vec![(start.clone(), Vec::new(), 0u32)];
        let mut visited = HashSet::new();
        visited.insert(start.key());

        while !frontier.is_empty() {
            let (state, path, cost) = frontier.remove(0);
            if state.is_goal() {
                return Some(path);
            }
            for action in state.legal_actions() {
                let next = state.successor(&action);
                if visited.insert(next.key()) {
                    let total = cost + state.action_cost(&action);
                    let mut next_path = path.clone();
                    next_path.push(action);
                    frontier.push((next, next_path, total));
                }
            }
            frontier.sort_by_key(|entry| entry.2);
        }
        None
    }
}

/// Best-first search ordered by accumulated cost plus an estimate.
///
/// Identical to [`CheapestFirst`] except that frontier ordering uses
/// `accumulated_cost + estimate(state)`. The estimate is evaluated once per
/// enqueued state and only influences expansion order; termination and path
/// validity do not depend on it. With [`heuristics::matched_goal_distance`]
/// as the estimate the ordering currently degenerates to cheapest-first,
/// because that estimate is zero everywhere (see its documentation).
pub struct BestFirst<H> {
    estimate: H,
}

impl<H> BestFirst<H> {
    /// Creates a best-first strategy with the given remaining-cost estimate.
    pub fn new(estimate: H) -> Self {
        BestFirst { estimate }
    }
}

impl<S, H> PathFinder<S> for BestFirst<H>
where
    S: SearchState,
    H: FnMut(&S) -> u32,
{
    fn find_path(&mut self, start: &S) -> Option<Vec<S::Action>> {
        let start_estimate = (self.estimate)(start);
        let mut frontier = vec![(start.clone(), Vec::new(), 0u32, start_estimate)];
        let mut visited = HashSet::new();
        visited.insert(start.key());

        while !frontier.is_empty() {
            let (state, path, cost, _) = frontier.remove(0);
            if state.is_goal() {
                return Some(path);
            }
            for action in state.legal_actions() {
                let next = state.successor(&action);
                if visited.insert(next.key()) {
                    let total = cost + state.action_cost(&action);
                    let guess = (self.estimate)(&next);
                    let mut next_path = path.clone();
                    next_path.push(action);
                    frontier.push((next, next_path, total, guess));
                }
            }
            frontier.sort_by_key(|entry| entry.2 + entry.3);
        }
        None
    }
}

/// Seeded random walk, the simplest baseline: repeatedly applies a uniformly
/// random legal action until a goal state is reached.
///
/// There is no frontier and no visited set, so the walk revisits states
/// freely and need not terminate when no goal is reachable; the same seed
/// always reproduces the same walk. A dead end (a non-goal state with no
/// legal actions) yields `None`. Not part of [`Strategy`], which only lists
/// the strategies that terminate on every finite state space.
pub struct RandomWalk {
    rng: SmallRng,
}

impl RandomWalk {
    /// Creates a random walk driven by the given seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomWalk {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<S: SearchState> PathFinder<S> for RandomWalk {
    fn find_path(&mut self, start: &S) -> Option<Vec<S::Action>> {
        let mut state = start.clone();
        let mut path = Vec::new();
        while !state.is_goal() {
            let actions = state.legal_actions();
            if actions.is_empty() {
                return None;
            }
            let action = actions[self.rng.gen_range(0..actions.len())].clone();
            state = state.successor(&action);
            path.push(action);
        }
        Some(path)
    }
}

/// The closed set of available strategies, for callers that select one by
/// name rather than constructing a [`PathFinder`] themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    MemoDepthFirst,
    BreadthFirst,
    CheapestFirst,
    BestFirst,
}

/// Runs a freshly constructed instance of `strategy` on `start`.
///
/// `Strategy::BestFirst` is wired to [`heuristics::matched_goal_distance`].
/// Note that `Strategy::MemoDepthFirst` here never benefits from cross-call
/// memoization; hold a [`MemoDepthFirst`] value directly for that.
pub fn solve(strategy: Strategy, start: &State) -> Option<Vec<Action>> {
    match strategy {
        Strategy::DepthFirst => DepthFirst.find_path(start),
        Strategy::MemoDepthFirst => MemoDepthFirst::new().find_path(start),
        Strategy::BreadthFirst => BreadthFirst.find_path(start),
        Strategy::CheapestFirst => CheapestFirst.find_path(start),
        Strategy::BestFirst => {
            BestFirst::new(heuristics::matched_goal_distance).find_path(start)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::state_from_str_array;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Replays `path` from `start` and reports whether it ends on a goal.
    fn replay<S: SearchState>(start: &S, path: &[S::Action]) -> bool {
        let mut state = start.clone();
        for action in path {
            state = state.successor(action);
        }
        state.is_goal()
    }

    fn all_strategies() -> Vec<Strategy> {
        vec![
            Strategy::DepthFirst,
            Strategy::MemoDepthFirst,
            Strategy::BreadthFirst,
            Strategy::CheapestFirst,
            Strategy::BestFirst,
        ]
    }

    #[test]
    fn test_already_solved_returns_empty_path() {
        let state = state_from_str_array(&["*.", ".*"]).unwrap();
        for strategy in all_strategies() {
            let path = solve(strategy, &state);
            assert_eq!(path, Some(Vec::new()), "{:?}", strategy);
        }
    }

    #[test]
    fn test_every_strategy_finds_a_valid_path() {
        let state = state_from_str_array(&["S..", "...", "..G"]).unwrap();
        for strategy in all_strategies() {
            let path = solve(strategy, &state).unwrap_or_else(|| {
                panic!("{:?} found no solution on a solvable puzzle", strategy)
            });
            assert!(!path.is_empty(), "{:?}", strategy);
            assert!(replay(&state, &path), "{:?} returned an invalid path", strategy);
        }
    }

    #[test]
    fn test_unsolvable_returns_none_for_all_strategies() {
        // One spaceship, two goal cells: the occupancy vectors can never be
        // equal, and the reachable state space is finite.
        let state = state_from_str_array(&["SG", ".G"]).unwrap();
        for strategy in all_strategies() {
            assert_eq!(solve(strategy, &state), None, "{:?}", strategy);
        }
    }

    #[test]
    fn test_breadth_first_is_shortest_under_uniform_costs() {
        let state = state_from_str_array(&["S..G"]).unwrap();
        let path = solve(Strategy::BreadthFirst, &state).unwrap();
        assert_eq!(path.len(), 3);
        assert!(replay(&state, &path));

        let state = state_from_str_array(&["S...", "....", "...G"]).unwrap();
        let path = solve(Strategy::BreadthFirst, &state).unwrap();
        assert_eq!(path.len(), 5, "Manhattan distance on an open grid");
    }

    #[test]
    fn test_cheapest_first_matches_breadth_first_length_under_uniform_costs() {
        let state = state_from_str_array(&["S...", ".G..", "..S.", "...G"]).unwrap();
        let bfs = solve(Strategy::BreadthFirst, &state).unwrap();
        let cheapest = solve(Strategy::CheapestFirst, &state).unwrap();
        assert!(replay(&state, &cheapest));
        assert_eq!(cheapest.len(), bfs.len());
    }

    #[test]
    fn test_best_first_degenerates_to_cheapest_first() {
        // matched_goal_distance is zero for every state, so the two frontiers
        // order identically and the returned paths match exactly.
        let state = state_from_str_array(&["S..", "G.S", "..G"]).unwrap();
        let best = solve(Strategy::BestFirst, &state).unwrap();
        let cheapest = solve(Strategy::CheapestFirst, &state).unwrap();
        assert_eq!(best, cheapest);
    }

    #[test]
    fn test_best_first_accepts_a_custom_estimate() {
        let state = state_from_str_array(&["S...", "....", "...G"]).unwrap();
        // Sum of each ship's distance to its nearest goal; admissible for this
        // single-ship puzzle.
        let mut strategy = BestFirst::new(|s: &crate::engine::State| {
            let grid = s.grid();
            let ships = crate::heuristics::decode_positions(s.spaceships(), grid);
            let goals = crate::heuristics::decode_positions(s.goals(), grid);
            ships
                .iter()
                .map(|ship| {
                    goals
                        .iter()
                        .map(|goal| crate::heuristics::manhattan(*ship, *goal))
                        .min()
                        .unwrap_or(0)
                })
                .sum()
        });
        let path = strategy.find_path(&state).unwrap();
        assert_eq!(path.len(), 5);
        assert!(replay(&state, &path));
    }

    #[test]
    fn test_depth_first_variants_agree_on_existence() {
        let solvable = state_from_str_array(&["S.", ".G"]).unwrap();
        let unsolvable = state_from_str_array(&["SG", ".G"]).unwrap();

        assert_eq!(
            DepthFirst.find_path(&solvable).is_some(),
            MemoDepthFirst::new().find_path(&solvable).is_some()
        );
        assert_eq!(
            DepthFirst.find_path(&unsolvable).is_some(),
            MemoDepthFirst::new().find_path(&unsolvable).is_some()
        );
    }

    #[test]
    fn test_depth_first_variants_agree_on_a_forced_line() {
        // A 1xN strip with one ship leaves no branching choices that survive
        // deduplication, so both variants return the same length.
        let state = state_from_str_array(&["S..G"]).unwrap();
        let plain = DepthFirst.find_path(&state).unwrap();
        let memo = MemoDepthFirst::new().find_path(&state).unwrap();
        assert_eq!(plain.len(), 3);
        assert_eq!(memo.len(), 3);
        assert!(replay(&state, &plain));
        assert!(replay(&state, &memo));
    }

    #[test]
    fn test_memo_depth_first_remembers_across_calls() {
        let state = state_from_str_array(&["S..G"]).unwrap();
        let mut strategy = MemoDepthFirst::new();

        assert!(strategy.find_path(&state).is_some());
        // The start state's key was expanded by the first call, so a reused
        // instance refuses to re-explore it. This is the documented cross-call
        // memoization contract, not a defect.
        assert_eq!(strategy.find_path(&state), None);

        // A fresh instance is isolated.
        assert!(MemoDepthFirst::new().find_path(&state).is_some());
    }

    // Wraps a puzzle state and records the key of every state that gets
    // expanded. Both depth-first variants call `legal_actions` exactly once
    // per expanded state, so the set doubles as the expansion log.
    #[derive(Clone)]
    struct CountingState {
        inner: crate::engine::State,
        expanded: Rc<RefCell<HashSet<u64>>>,
    }

    impl SearchState for CountingState {
        type Action = crate::engine::Action;
        type Key = u64;

        fn is_goal(&self) -> bool {
            self.inner.is_goal_state()
        }

        fn legal_actions(&self) -> Vec<crate::engine::Action> {
            self.expanded.borrow_mut().insert(self.inner.key());
            self.inner.legal_actions()
        }

        fn successor(&self, action: &crate::engine::Action) -> Self {
            CountingState {
                inner: self.inner.successor(action),
                expanded: Rc::clone(&self.expanded),
            }
        }

        fn action_cost(&self, action: &crate::engine::Action) -> u32 {
            self.inner.action_cost(action)
        }

        fn key(&self) -> u64 {
            self.inner.key()
        }
    }

    #[test]
    fn test_depth_first_variants_expand_the_same_state_set() {
        // On a branching puzzle the plain variant holds duplicate frontier
        // entries that the pruning variant never pushes, but the duplicates
        // are skipped when popped: the set of expanded states is identical.
        let state = state_from_str_array(&["S..", "...", "..G"]).unwrap();

        let plain_log = Rc::new(RefCell::new(HashSet::new()));
        let plain_start = CountingState {
            inner: state.clone(),
            expanded: Rc::clone(&plain_log),
        };
        assert!(DepthFirst.find_path(&plain_start).is_some());

        let memo_log = Rc::new(RefCell::new(HashSet::new()));
        let memo_start = CountingState {
            inner: state,
            expanded: Rc::clone(&memo_log),
        };
        assert!(MemoDepthFirst::new().find_path(&memo_start).is_some());

        assert!(!plain_log.borrow().is_empty());
        assert_eq!(*plain_log.borrow(), *memo_log.borrow());
    }

    #[test]
    fn test_random_walk_on_a_forced_line() {
        // One legal action per step, so the walk is fully forced.
        let state = state_from_str_array(&["SG"]).unwrap();
        let path = RandomWalk::with_seed(7).find_path(&state).unwrap();
        assert_eq!(path.len(), 1);
        assert!(replay(&state, &path));
    }

    #[test]
    fn test_random_walk_returns_a_valid_path() {
        let state = state_from_str_array(&["S.G"]).unwrap();
        let path = RandomWalk::with_seed(42).find_path(&state).unwrap();
        assert!(replay(&state, &path));
    }

    #[test]
    fn test_random_walk_already_solved_and_dead_end() {
        let solved = state_from_str_array(&["*"]).unwrap();
        assert_eq!(RandomWalk::with_seed(0).find_path(&solved), Some(Vec::new()));

        // A lone ship on a 1x1 grid with no goal cell: not a goal state, and
        // no legal action exists.
        let stuck = state_from_str_array(&["S"]).unwrap();
        assert_eq!(
            RandomWalk::with_seed(0).find_path(&stuck),
            None::<Vec<crate::engine::Action>>
        );
    }

    // A tiny directed graph with per-edge costs, used to observe expansion
    // order and the eager visited marking. Actions are indices into the
    // current node's adjacency list.
    #[derive(Clone)]
    struct CostGraph {
        node: usize,
        goal: usize,
        edges: Rc<Vec<Vec<(usize, u32)>>>,
        pops: Rc<RefCell<Vec<usize>>>,
    }

    impl CostGraph {
        fn new(edges: Vec<Vec<(usize, u32)>>, start: usize, goal: usize) -> Self {
            CostGraph {
                node: start,
                goal,
                edges: Rc::new(edges),
                pops: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    impl SearchState for CostGraph {
        type Action = usize;
        type Key = usize;

        fn is_goal(&self) -> bool {
            // Strategies test for the goal exactly once per extraction, so
            // this log records the pop order.
            self.pops.borrow_mut().push(self.node);
            self.node == self.goal
        }

        fn legal_actions(&self) -> Vec<usize> {
            (0..self.edges[self.node].len()).collect()
        }

        fn successor(&self, action: &usize) -> Self {
            let mut next = self.clone();
            next.node = self.edges[self.node][*action].0;
            next
        }

        fn action_cost(&self, action: &usize) -> u32 {
            self.edges[self.node][*action].1
        }

        fn key(&self) -> usize {
            self.node
        }
    }

    #[test]
    fn test_cheapest_first_pops_in_nondecreasing_cost_order() {
        // 0 --5--> 1, 0 --1--> 2, 2 --1--> 3; no goal is reachable.
        let graph = CostGraph::new(
            vec![vec![(1, 5), (2, 1)], vec![], vec![(3, 1)], vec![]],
            0,
            usize::MAX,
        );
        assert_eq!(CheapestFirst.find_path(&graph), None);
        // Accumulated costs at extraction: 0, 1, 2, 5.
        assert_eq!(*graph.pops.borrow(), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_cheapest_first_eager_marking_can_miss_the_cheapest_route() {
        // 0 --1--> 1 --1--> 2 --1--> 3 is the cheapest route to the goal (3),
        // but node 2 is scheduled first through the direct cost-10 edge, and
        // the eager visited marking discards the later, cheaper route.
        let graph = CostGraph::new(
            vec![vec![(1, 1), (2, 10)], vec![(2, 1)], vec![(3, 1)], vec![]],
            0,
            3,
        );
        let path = CheapestFirst.find_path(&graph).unwrap();
        // Edge 1 out of node 0 (to node 2), then edge 0 out of node 2: total
        // cost 11 instead of the optimal 3.
        assert_eq!(path, vec![1, 0]);
    }

    // The single-action toy space: one occupied bit advances one position per
    // move until it reaches the highest position.
    #[derive(Clone)]
    struct ShiftSpace {
        occupied: u64,
        target: u64,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Shift;

    impl SearchState for ShiftSpace {
        type Action = Shift;
        type Key = u64;

        fn is_goal(&self) -> bool {
            self.occupied == self.target
        }

        fn legal_actions(&self) -> Vec<Shift> {
            if self.occupied < self.target {
                vec![Shift]
            } else {
                Vec::new()
            }
        }

        fn successor(&self, _action: &Shift) -> Self {
            ShiftSpace {
                occupied: self.occupied << 1,
                target: self.target,
            }
        }

        fn action_cost(&self, _action: &Shift) -> u32 {
            1
        }

        fn key(&self) -> u64 {
            self.occupied
        }
    }

    #[test]
    fn test_toy_shift_space_exercises_the_generic_contract() {
        let space = ShiftSpace {
            occupied: 0b0001,
            target: 0b1000,
        };
        assert_eq!(BreadthFirst.find_path(&space).map(|p| p.len()), Some(3));
        assert_eq!(CheapestFirst.find_path(&space).map(|p| p.len()), Some(3));

        let dfs = DepthFirst.find_path(&space).unwrap();
        assert!(replay(&space, &dfs));
    }

    #[test]
    fn test_toy_shift_space_dead_end_yields_none() {
        // Overshooting is impossible here, but a target below the occupied
        // bit leaves no legal actions at all: an immediate dead end.
        let space = ShiftSpace {
            occupied: 0b0100,
            target: 0b0010,
        };
        for strategy in [
            BreadthFirst.find_path(&space),
            CheapestFirst.find_path(&space),
            DepthFirst.find_path(&space),
        ] {
            assert_eq!(strategy, None);
        }
    }

    #[test]
    fn test_paths_replay_on_a_multi_ship_puzzle() {
        let state = state_from_str_array(&["SS..", "....", "..GG"]).unwrap();
        for strategy in all_strategies() {
            let path = solve(strategy, &state).unwrap();
            assert!(replay(&state, &path), "{:?}", strategy);
        }
    }
}
