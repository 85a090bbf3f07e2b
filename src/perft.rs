use std::{
    convert::Infallible,
    ops::ControlFlow::{self, *},
    sync::{
        atomic::{AtomicBool, Ordering::Relaxed},
        Arc,
    },
};

use log::{info, trace};

use crate::game::Game;

/// Initial capacity of the per-ply move buffers.
const MOVES_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerftMode {
    /// Recurses down to depth zero.
    Naive,
    /// Counts the generated moves at depth one instead of playing them.
    Batch,
}

/// How the position is restored after exploring a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restore {
    Unmake,
    Copy,
}

#[derive(Debug, Clone)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    pub fn new(flag: &Arc<AtomicBool>) -> Self {
        Self(flag.clone())
    }

    pub fn set(&self) {
        self.0.store(true, Relaxed);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Relaxed)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("perft aborted")]
pub struct Aborted;

pub trait ControlFlowExt<T> {
    fn into_continue(self) -> T;
}

impl<T> ControlFlowExt<T> for ControlFlow<Infallible, T> {
    #[inline(always)]
    fn into_continue(self) -> T {
        match self {
            Continue(v) => v,
            Break(v) => match v {},
        }
    }
}

/// Checked once per visited node.
trait Interrupt {
    type Break;

    fn check(&self) -> ControlFlow<Self::Break>;
}

impl Interrupt for () {
    type Break = Infallible;

    #[inline(always)]
    fn check(&self) -> ControlFlow<Infallible> {
        Continue(())
    }
}

impl Interrupt for AbortFlag {
    type Break = Aborted;

    #[inline(always)]
    fn check(&self) -> ControlFlow<Aborted> {
        if self.is_set() {
            Break(Aborted)
        } else {
            Continue(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perft {
    pub depth: u32,
    pub mode: PerftMode,
    pub restore: Restore,
}

impl Perft {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            mode: PerftMode::Batch,
            restore: Restore::Unmake,
        }
    }

    #[must_use]
    pub fn mode(self, mode: PerftMode) -> Self {
        Self { mode, ..self }
    }

    #[must_use]
    pub fn restore(self, restore: Restore) -> Self {
        Self { restore, ..self }
    }

    /// Counts the leaves `depth` plies below `game`. Positions with a road are terminal and
    /// contribute no leaves unless they are leaves themselves.
    pub fn run<G: Game>(&self, game: &mut G) -> u64 {
        self.count(game, self.depth, &()).into_continue()
    }

    /// Like [`Perft::run`], giving up once `flag` is set. The position is restored either way.
    pub fn run_abortable<G: Game>(&self, game: &mut G, flag: &AbortFlag) -> Result<u64, Aborted> {
        match self.count(game, self.depth, flag) {
            Continue(nodes) => Ok(nodes),
            Break(aborted) => Err(aborted),
        }
    }

    /// Leaf counts below each legal move of `game`.
    pub fn divide<G: Game>(&self, game: &mut G) -> Vec<(G::Move, u64)> {
        if self.depth == 0 || game.road() {
            return Vec::new();
        }

        let mut moves = Vec::with_capacity(MOVES_CAPACITY);
        game.generate_moves(&mut moves);

        let mut buffers = self.buffers(self.depth - 1);
        let divided: Vec<_> = moves
            .into_iter()
            .map(|mv| {
                let nodes = with_move(game, mv, self.restore, |game| {
                    node(game, self.depth - 1, &mut buffers, self.mode, self.restore, &())
                })
                .into_continue();

                trace!("{mv}: {nodes}");
                (mv, nodes)
            })
            .collect();

        info!(
            "divide {}: {} moves, {} nodes",
            self.depth,
            divided.len(),
            divided.iter().map(|&(_, nodes)| nodes).sum::<u64>()
        );

        divided
    }

    fn buffers<M>(&self, depth: u32) -> Vec<Vec<M>> {
        (0..depth).map(|_| Vec::with_capacity(MOVES_CAPACITY)).collect()
    }

    fn count<G: Game, I: Interrupt>(
        &self,
        game: &mut G,
        depth: u32,
        interrupt: &I,
    ) -> ControlFlow<I::Break, u64> {
        let mut buffers = self.buffers(depth);
        node(game, depth, &mut buffers, self.mode, self.restore, interrupt)
    }
}

#[inline(always)]
fn with_move<G: Game, R>(
    game: &mut G,
    mv: G::Move,
    restore: Restore,
    f: impl FnOnce(&mut G) -> R,
) -> R {
    match restore {
        Restore::Unmake => {
            game.make_move(mv);
            let r = f(game);
            game.unmake_move(mv);
            r
        }
        Restore::Copy => {
            let snapshot = game.clone();
            game.make_move(mv);
            let r = f(game);
            *game = snapshot;
            r
        }
    }
}

fn node<G: Game, I: Interrupt>(
    game: &mut G,
    depth: u32,
    buffers: &mut [Vec<G::Move>],
    mode: PerftMode,
    restore: Restore,
    interrupt: &I,
) -> ControlFlow<I::Break, u64> {
    interrupt.check()?;

    if depth == 0 {
        return Continue(1);
    }

    if game.road() {
        return Continue(0);
    }

    let [moves, rest @ ..] = buffers else {
        unreachable!("one move buffer per remaining ply");
    };

    moves.clear();
    game.generate_moves(moves);

    if depth == 1 && mode == PerftMode::Batch {
        return Continue(moves.len() as u64);
    }

    moves.iter().try_fold(0, |sum, &mv| {
        let nodes = with_move(game, mv, restore, |game| {
            node(game, depth - 1, rest, mode, restore, interrupt)
        })?;
        Continue(sum + nodes)
    })
}

/// Shorthand for a [`Perft`] run with the default restore strategy.
pub fn perft<G: Game>(game: &mut G, depth: u32, mode: PerftMode) -> u64 {
    Perft::new(depth).mode(mode).run(game)
}
