//! Per-size constants the board template is instantiated with.

pub mod size3 {
    pub const SIZE: usize = 3;

    #[cfg(test)]
    pub const PERFT: &[(u32, u64)] = &[
        (0, 1),
        (1, 9),
        (2, 72),
        (3, 1200),
        (4, 17792),
        (5, 271812),
        (6, 3712952),
    ];
}

pub mod size4 {
    pub const SIZE: usize = 4;

    #[cfg(test)]
    pub const PERFT: &[(u32, u64)] = &[
        (0, 1),
        (1, 16),
        (2, 240),
        (3, 7440),
        (4, 216464),
        (5, 6468872),
    ];
}

pub mod size5 {
    pub const SIZE: usize = 5;

    #[cfg(test)]
    pub const PERFT: &[(u32, u64)] = &[(0, 1), (1, 25), (2, 600), (3, 43320), (4, 2999784)];
}

pub mod size6 {
    pub const SIZE: usize = 6;

    #[cfg(test)]
    pub const PERFT: &[(u32, u64)] = &[(0, 1), (1, 36), (2, 1260), (3, 132720), (4, 13586048)];
}

pub mod size7 {
    pub const SIZE: usize = 7;

    #[cfg(test)]
    pub const PERFT: &[(u32, u64)] = &[(0, 1), (1, 49), (2, 2352), (3, 339696)];
}

pub mod size8 {
    pub const SIZE: usize = 8;

    #[cfg(test)]
    pub const PERFT: &[(u32, u64)] = &[(0, 1), (1, 64), (2, 4032), (3, 764064)];
}
