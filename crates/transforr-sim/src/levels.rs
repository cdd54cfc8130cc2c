//! Built-in level grids, played in order.
//!
//! Every grid is 141 cells wide so the floor reaches past the goal line.

const GRASSLAND_FLOW: &[&str] = &[
    ".............................................................................................................................................",
    ".............................................................................................................................................",
    "...............................................................................X........S.....X..........X.....X.............................",
    ".............................XXX...................XS..............X......................X...X...........X.....X............................",
    "........................P..................P...................X.......................B.......................X.............................",
    ".......................P.....N........S...P...............X..................................XH...............X..............................",
    "............................PP.....X.PP............H.N....................B...............X...X..............X...............................",
    "...............PP.........................P........XXX......P.................K......S...X......SX..........X................................",
    "................P.......P................NP..................................XXXX............X...X.........X.................................",
    "...........N.X..P...N..P.....C...W.X.X..XP.....C....M.....X....H..............C.............X....X....M.M.X.H....C...........................",
    "XXXXXXXXXXXXXXX.X..XXXXXXXXXXXXXXX.........XXXXXXXXXXXXXXXXXX..X........X..XXXXXXXX..XXXXXXXX.....XXXXXXXXXXXXXXXXXXX.X.X.X.XXXXXXXXXXXXXXXXX",
    ".............................................................................................................................................",
];

const ENEMY_RHYTHM: &[&str] = &[
    ".............................................................................................................................................",
    ".............P.................P.................P.................P.........................................................................",
    ".............P.................P.................P.................P.........................................................................",
    ".............P.................P.................P.................P.........................................................................",
    "..................C..................C..................C..................C.................................................................",
    ".............P.................P.................P.................P.........................................................................",
    "..................C..................C..................C..................C.................................................................",
    "....O...W.............K.................B.................O.H...............K................................................................",
    "XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXX...............................................",
    "XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];

const PIPES_AND_PRESSURE: &[&str] = &[
    ".............................................................................................................................................",
    ".............P.................P.................P.................P.........................................................................",
    ".............P.................P.................P.................P.........................................................................",
    ".............................................................................................................................................",
    ".............P.................P.................P.................P.........................................................................",
    ".............P.................P.................P.................P.........................................................................",
    "..................C..................C..................C..................C.................................................................",
    "....R.W.P..O..............R......K..............R......B........H.....R......O...............................................................",
    "XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXX...............................................",
    "XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXX..XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];

const BROKEN_GROUND: &[&str] = &[
    ".............................................................................................................................................",
    ".............P.................P.................P.................P.........................................................................",
    ".............P.................P.................P.................P.........................................................................",
    "..................C..................C..................C..................C.................................................................",
    "....O.................K.................B.................O.................K................................................................",
    ".............................................................................................................................................",
    ".............................................................................................................................................",
    ".............................................................................................................................................",
    ".............................................................................................................................................",
    ".....W........................................................H..............................................................................",
    "XXXXXXXX....XXXXXXXX.....XXXXXXXX.....XXXXXXXX.....XXXXXXXX.....XXXXXXXX.....XXXXXXXX.....XXXX...............................................",
    "XXXXXXXX....XXXXXXXX....XXXXXXXX...XXXXXXXX....XXXXXXXX.XXXXXXXX....XXXXXXXX..XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];

const ENDURANCE_RUN: &[&str] = &[
    ".............................................................................................................................................",
    ".............P.................P.................P.................P.........................................................................",
    ".............P.................P.................P.................P.........................................................................",
    "..................C..................C..................C..................C.................................................................",
    ".............P.................P.................P.................P.........................................................................",
    "..................C..................C..................C..................C.................................................................",
    "....O..W..K.............B.....O.............K.....B.......H.....O.....K.......................................H..............................",
    "XXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXX..................................D............",
    "XXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXX..XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
];

/// All built-in levels in play order. The last one ends in a boss fight.
pub const LEVELS: &[&[&str]] = &[
    GRASSLAND_FLOW,
    ENEMY_RHYTHM,
    PIPES_AND_PRESSURE,
    BROKEN_GROUND,
    ENDURANCE_RUN,
];

/// Owned copies of the built-in levels, for handing to the engine.
pub fn builtin() -> Vec<Vec<String>> {
    LEVELS
        .iter()
        .map(|rows| rows.iter().map(|row| row.to_string()).collect())
        .collect()
}
