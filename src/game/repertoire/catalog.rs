//! The bundled opening catalog
//!
//! Lines are literal SAN token sequences starting from the initial position,
//! alternating white and black. `tests/repertoire_tests.rs` replays every line
//! against the rules engine.

use super::{Line, Opening};
use shakmaty::Color;

pub(super) static OPENINGS: &[Opening] = &[
    Opening {
        key: "philidor",
        name: "Philidor Defense",
        trainee: Color::Black,
        main_line: "main",
        lines: &[
            Line {
                key: "main",
                moves: &["e4", "e5", "Nf3", "d6", "d4", "Nf6", "Nc3", "Nbd7", "Bc4", "Be7", "O-O", "O-O", "Qe2", "c6", "a4", "Qc7", "Rd1", "h6", "h3"],
            },
            Line {
                key: "hanham",
                moves: &["e4", "e5", "Nf3", "d6", "d4", "Nd7", "Bc4", "c6", "O-O", "Be7", "dxe5", "dxe5", "Ng5", "Bxg5", "Qh5", "Qe7", "Bxg5", "Qxg5"],
            },
            Line {
                key: "exchange",
                moves: &["e4", "e5", "Nf3", "d6", "d4", "exd4", "Nxd4", "Nf6", "Nc3", "Be7", "Be2", "O-O", "O-O", "c6", "f4", "Nbd7", "Bf3", "Nc5"],
            },
            Line {
                key: "larsen",
                moves: &["e4", "e5", "Nf3", "d6", "Bc4", "Be7", "d4", "Nf6", "dxe5", "dxe5", "Qxd8+", "Bxd8", "Nxe5", "Be6", "Bxe6", "fxe6"],
            },
            Line {
                key: "antoshin",
                moves: &["e4", "e5", "Nf3", "d6", "d4", "Nf6", "Nc3", "Nbd7", "Bc4", "Be7", "O-O", "O-O", "Re1", "c6", "a4", "a5", "h3", "Qc7"],
            },
            Line {
                key: "liondefense",
                moves: &["e4", "e5", "Nf3", "d6", "d4", "Nd7", "Bc4", "Ngf6", "Ng5", "d5", "exd5", "h6", "Nf3", "e4", "Qe2", "Bb4+"],
            },
        ],
        alternatives: &["Nf6", "Nd7", "Be7", "Nbd7", "O-O", "c6", "Qe7"],
        description: "A solid opening (1.e4 e5 2.Nf3 d6) that prioritizes a strong pawn center and flexible piece development. Named after François-André Danican Philidor, it emphasizes pawn structure over rapid piece activity. The Philidor is known for being solid but passive, often leading to cramped positions for Black. It's an excellent choice for positional players who prefer defensive setups with counterattacking opportunities.",
    },
    Opening {
        key: "london",
        name: "London System",
        trainee: Color::White,
        main_line: "main",
        lines: &[
            Line {
                key: "main",
                moves: &["d4", "d5", "Bf4", "Nf6", "e3", "e6", "Nf3", "Bd6", "Bg3", "O-O", "Bd3", "c5", "c3", "Nc6", "Nbd2", "Qe7", "Ne5", "Nd7", "Nxd7", "Bxd7"],
            },
            Line {
                key: "nf6first",
                moves: &["d4", "Nf6", "Bf4", "e6", "e3", "d5", "Nf3", "Bd6", "Bg3", "O-O", "Bd3", "c5", "c3", "Nc6", "Nbd2", "b6", "Ne5"],
            },
            Line {
                key: "c5response",
                moves: &["d4", "d5", "Bf4", "c5", "e3", "Nc6", "Nf3", "Nf6", "c3", "Qb6", "Qb3", "c4", "Qc2", "Bf5", "Qc1", "e6", "Nbd2"],
            },
            Line {
                key: "kingsindian",
                moves: &["d4", "Nf6", "Bf4", "g6", "Nf3", "Bg7", "e3", "O-O", "Be2", "d6", "h3", "Nbd7", "O-O", "Qe8", "c4", "e5"],
            },
            Line {
                key: "qgd",
                moves: &["d4", "d5", "Bf4", "Nf6", "e3", "c5", "c3", "Nc6", "Nf3", "Qb6", "Qb3", "c4", "Qc2", "Bf5", "Qb1", "e6", "Nbd2"],
            },
            Line {
                key: "grunfeld",
                moves: &["d4", "Nf6", "Bf4", "g6", "Nf3", "Bg7", "e3", "d5", "Be2", "O-O", "O-O", "c5", "c3", "Nc6", "Nbd2", "Qb6"],
            },
            Line {
                key: "benoni",
                moves: &["d4", "Nf6", "Bf4", "c5", "e3", "cxd4", "exd4", "d5", "Nf3", "Nc6", "c3", "Bg4", "Nbd2", "e6", "Be2"],
            },
        ],
        alternatives: &["d4", "Bf4", "e3", "Nf3", "Bd3", "Nbd2", "O-O", "c3"],
        description: "A solid and reliable opening system (1.d4 followed by 2.Bf4 and 3.e3) that became popular at the London 1922 tournament. The London System is known for its straightforward development scheme and flexible pawn structure. It's popular at all levels because it leads to playable positions against virtually any Black setup, requires less memorization than sharp variations, and offers White a safe, positional game with long-term pressure.",
    },
    Opening {
        key: "italian",
        name: "Italian Game",
        trainee: Color::White,
        main_line: "main",
        lines: &[
            Line {
                key: "main",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "c3", "Nf6", "d3", "d6", "O-O", "O-O", "Nbd2", "a6", "Bb3", "Ba7", "h3", "Ne7", "Re1", "Ng6"],
            },
            Line {
                key: "giuoco_piano",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "c3", "Nf6", "d4", "exd4", "cxd4", "Bb4+", "Bd2", "Bxd2+", "Nbxd2", "d5", "exd5", "Nxd5", "O-O"],
            },
            Line {
                key: "evans_gambit",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "b4", "Bxb4", "c3", "Ba5", "d4", "exd4", "O-O", "dxc3", "Qb3", "Qf6", "e5", "Qg6", "Nxc3"],
            },
            Line {
                key: "two_knights",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "Ng5", "d5", "exd5", "Na5", "Bb5+", "c6", "dxc6", "bxc6", "Be2", "h6", "Nf3", "e4", "Ne5"],
            },
            Line {
                key: "classical",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "c3", "Nf6", "d4", "exd4", "cxd4", "Bb4+", "Nc3", "Nxe4", "O-O", "Bxc3", "bxc3", "d5"],
            },
        ],
        alternatives: &[],
        description: "One of the oldest recorded chess openings (1.e4 e5 2.Nf3 Nc6 3.Bc4), originating from Italian chess studies in the 16th century. The Italian Game aims for rapid development and central control, targeting the f7 square. It leads to open, tactical positions with opportunities for both sides. Modern variations include the Giuoco Piano (\"Quiet Game\") and the aggressive Evans Gambit, offering diverse strategic plans from classical maneuvering to sharp tactical battles.",
    },
    Opening {
        key: "ruylopez",
        name: "Ruy Lopez",
        trainee: Color::White,
        main_line: "closed",
        lines: &[
            Line {
                key: "closed",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7", "Re1", "b5", "Bb3", "d6", "c3", "O-O", "d4", "Bg4", "Be3", "exd4"],
            },
            Line {
                key: "berlin",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "Nf6", "O-O", "Nxe4", "d4", "Nd6", "Bxc6", "dxc6", "dxe5", "Nf5", "Qxd8+", "Kxd8", "Nc3", "Ke8", "h3"],
            },
            Line {
                key: "exchange",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6", "dxc6", "O-O", "f6", "d4", "exd4", "Nxd4", "c5", "Nb3", "Qxd1", "Rxd1", "Bg4", "f3", "Be6"],
            },
            Line {
                key: "marshall",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7", "Re1", "b5", "Bb3", "O-O", "c3", "d5", "exd5", "Nxd5", "Nxe5", "Nxe5", "Rxe5"],
            },
            Line {
                key: "breyer",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7", "Re1", "b5", "Bb3", "d6", "c3", "O-O", "h3", "Nb8", "d4", "Nbd7"],
            },
            Line {
                key: "chigorin",
                moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7", "Re1", "b5", "Bb3", "d6", "c3", "O-O", "h3", "Na5", "Bc2", "c5", "d4"],
            },
        ],
        alternatives: &[],
        description: "Named after 16th-century Spanish priest Ruy López de Segura, this is one of the most popular and deeply analyzed chess openings (1.e4 e5 2.Nf3 Nc6 3.Bb5). The Ruy Lopez aims to pressure Black's center and create long-term positional advantages. It features numerous variations including the solid Closed Defense, the Berlin Wall (popularized by Kramnik), and the sharp Marshall Attack. The opening rewards deep preparation and strategic understanding.",
    },
    Opening {
        key: "scotch",
        name: "Scotch Opening",
        trainee: Color::White,
        main_line: "main",
        lines: &[
            Line {
                key: "main",
                moves: &["e4", "e5", "Nf3", "Nc6", "d4", "exd4", "Nxd4", "Nf6", "Nxc6", "bxc6", "e5", "Qe7", "Qe2", "Nd5", "c4", "Ba6", "b3", "g6", "f4", "Bg7"],
            },
            Line {
                key: "classical",
                moves: &["e4", "e5", "Nf3", "Nc6", "d4", "exd4", "Nxd4", "Bc5", "Be3", "Qf6", "c3", "Nge7", "Bc4", "Ne5", "Be2", "Qg6", "O-O", "d6", "Kh1"],
            },
            Line {
                key: "mieses",
                moves: &["e4", "e5", "Nf3", "Nc6", "d4", "exd4", "Nxd4", "Nf6", "Nxc6", "bxc6", "e5", "Qe7", "Qe2", "Nd5", "c4", "Nf4", "Qe4", "Ng6", "Bd3"],
            },
            Line {
                key: "steinitz",
                moves: &["e4", "e5", "Nf3", "Nc6", "d4", "exd4", "Nxd4", "Qh4", "Nc3", "Bb4", "Be2", "Qxe4", "Nb5", "Bxc3+", "bxc3", "Kd8", "O-O", "a6"],
            },
            Line {
                key: "scotchgambit",
                moves: &["e4", "e5", "Nf3", "Nc6", "d4", "exd4", "Bc4", "Nf6", "e5", "d5", "Bb5", "Ne4", "Nxd4", "Bc5", "Be3", "Bd7", "Bxc6", "bxc6"],
            },
        ],
        alternatives: &[],
        description: "An aggressive opening (1.e4 e5 2.Nf3 Nc6 3.d4) that immediately challenges Black's central pawn. The Scotch leads to open positions with active piece play and tactical opportunities. Popular with players like Kasparov, it avoids the heavy theory of the Ruy Lopez while maintaining White's initiative. The opening often results in imbalanced positions where both sides have chances for active play, making it ideal for players who prefer direct confrontation.",
    },
    Opening {
        key: "kingsgambit",
        name: "King's Gambit",
        trainee: Color::White,
        main_line: "accepted",
        lines: &[
            Line {
                key: "accepted",
                moves: &["e4", "e5", "f4", "exf4", "Nf3", "g5", "h4", "g4", "Ne5", "Nf6", "Bc4", "d5", "exd5", "Bd6", "d4", "Nh5", "Nc3", "Qe7"],
            },
            Line {
                key: "falkbeer",
                moves: &["e4", "e5", "f4", "d5", "exd5", "e4", "d3", "Nf6", "Nd2", "exd3", "Bxd3", "Nxd5", "Ngf3", "Bd6", "Qe2+", "Qe7", "Qxe7+", "Bxe7"],
            },
            Line {
                key: "declined",
                moves: &["e4", "e5", "f4", "Bc5", "Nf3", "d6", "c3", "Nf6", "d4", "exd4", "cxd4", "Bb4+", "Bd2", "Bxd2+", "Nbxd2", "Nxe4", "Bd3", "Nxd2", "Qxd2"],
            },
            Line {
                key: "modern",
                moves: &["e4", "e5", "f4", "exf4", "Nf3", "d5", "exd5", "Nf6", "Bb5+", "c6", "dxc6", "Nxc6", "d4", "Bd6", "O-O", "O-O", "Bxc6", "bxc6"],
            },
            Line {
                key: "fischer",
                moves: &["e4", "e5", "f4", "exf4", "Nf3", "d6", "d4", "g5", "h4", "g4", "Ng1", "Bh6", "Nc3", "c6", "Nge2", "Qf6", "Nf4"],
            },
        ],
        alternatives: &[],
        description: "One of the oldest and most romantic openings (1.e4 e5 2.f4), dating back to the 16th century. The King's Gambit sacrifices material for rapid development and attacking chances against the enemy king. While modern defensive techniques have reduced its popularity at the highest level, it remains a dangerous weapon for aggressive players. The opening can lead to wild tactical positions where calculation and courage are rewarded.",
    },
    Opening {
        key: "sicilian",
        name: "Sicilian Defense",
        trainee: Color::Black,
        main_line: "najdorf",
        lines: &[
            Line {
                key: "najdorf",
                moves: &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "a6", "Be3", "e5", "Nb3", "Be6", "f3", "Be7", "Qd2", "O-O", "O-O-O"],
            },
            Line {
                key: "dragon",
                moves: &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "g6", "Be3", "Bg7", "f3", "O-O", "Qd2", "Nc6", "Bc4", "Bd7", "O-O-O"],
            },
            Line {
                key: "sveshnikov",
                moves: &["e4", "c5", "Nf3", "Nc6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "e5", "Ndb5", "d6", "Bg5", "a6", "Na3", "b5", "Nd5", "Be7"],
            },
            Line {
                key: "classical",
                moves: &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "Nc6", "Be2", "e5", "Nb3", "Be7", "O-O", "O-O", "Be3", "Be6"],
            },
            Line {
                key: "accelerated_dragon",
                moves: &["e4", "c5", "Nf3", "Nc6", "d4", "cxd4", "Nxd4", "g6", "Nc3", "Bg7", "Be3", "Nf6", "Bc4", "O-O", "Bb3", "d6"],
            },
        ],
        alternatives: &[],
        description: "The most popular defense to 1.e4 at all levels (1.e4 c5), creating immediate imbalance and fighting for the initiative. The Sicilian Defense leads to asymmetrical positions where Black has excellent winning chances. With numerous variations like the Najdorf, Dragon, and Sveshnikov, it offers rich tactical and strategic possibilities. The Sicilian is the weapon of choice for players seeking complex positions and counterattacking opportunities.",
    },
    Opening {
        key: "french",
        name: "French Defense",
        trainee: Color::Black,
        main_line: "winawer",
        lines: &[
            Line {
                key: "winawer",
                moves: &["e4", "e6", "d4", "d5", "Nc3", "Bb4", "e5", "c5", "a3", "Bxc3+", "bxc3", "Ne7", "Qg4", "O-O", "Bd3", "Nbc6", "Qh5"],
            },
            Line {
                key: "classical",
                moves: &["e4", "e6", "d4", "d5", "Nc3", "Nf6", "Bg5", "Be7", "e5", "Nfd7", "Bxe7", "Qxe7", "f4", "O-O", "Nf3", "c5", "Qd2"],
            },
            Line {
                key: "tarrasch",
                moves: &["e4", "e6", "d4", "d5", "Nd2", "Nf6", "e5", "Nfd7", "Bd3", "c5", "c3", "Nc6", "Ne2", "cxd4", "cxd4", "f6", "exf6", "Nxf6"],
            },
            Line {
                key: "advance",
                moves: &["e4", "e6", "d4", "d5", "e5", "c5", "c3", "Nc6", "Nf3", "Qb6", "a3", "c4", "Nbd2", "Na5", "Be2", "Bd7", "O-O"],
            },
        ],
        alternatives: &[],
        description: "A solid defensive system (1.e4 e6) that leads to strategic, closed positions. The French Defense creates a rigid pawn structure where both sides have clear plans. Black often gets a space disadvantage but gains counterplay on the queenside and center. It's favored by positional players who understand pawn structures and strategic maneuvering. The French has been employed by world champions and remains popular at all levels.",
    },
    Opening {
        key: "carokann",
        name: "Caro-Kann Defense",
        trainee: Color::Black,
        main_line: "classical",
        lines: &[
            Line {
                key: "classical",
                moves: &["e4", "c6", "d4", "d5", "Nc3", "dxe4", "Nxe4", "Bf5", "Ng3", "Bg6", "h4", "h6", "Nf3", "Nd7", "h5", "Bh7", "Bd3", "Bxd3", "Qxd3"],
            },
            Line {
                key: "advance",
                moves: &["e4", "c6", "d4", "d5", "e5", "Bf5", "Nf3", "e6", "Be2", "Nd7", "O-O", "Ne7", "Nbd2", "h6", "Nb3", "Bg6", "Nfd2"],
            },
            Line {
                key: "exchange",
                moves: &["e4", "c6", "d4", "d5", "exd5", "cxd5", "Bd3", "Nc6", "c3", "Nf6", "Bf4", "Bg4", "Qb3", "Na5", "Qa4+", "Bd7", "Qc2"],
            },
            Line {
                key: "panov",
                moves: &["e4", "c6", "d4", "d5", "exd5", "cxd5", "c4", "Nf6", "Nc3", "Nc6", "Bg5", "e6", "Nf3", "Be7", "c5", "O-O", "Bb5"],
            },
        ],
        alternatives: &[],
        description: "A reliable defense (1.e4 c6) known for its solidity and fewer tactical complications compared to the Sicilian. The Caro-Kann leads to positions where Black maintains a solid structure and often equalizes comfortably. It's popular among players who want to avoid sharp tactical battles while maintaining winning chances. The opening has been trusted by world champions and is considered one of Black's most dependable responses to 1.e4.",
    },
    Opening {
        key: "kingsindian",
        name: "King's Indian Defense",
        trainee: Color::Black,
        main_line: "classical",
        lines: &[
            Line {
                key: "classical",
                moves: &["d4", "Nf6", "c4", "g6", "Nc3", "Bg7", "e4", "d6", "Nf3", "O-O", "Be2", "e5", "O-O", "Nc6", "d5", "Ne7", "Ne1", "Nd7", "Be3"],
            },
            Line {
                key: "samisch",
                moves: &["d4", "Nf6", "c4", "g6", "Nc3", "Bg7", "e4", "d6", "f3", "O-O", "Be3", "e5", "Nge2", "c6", "Qd2", "Nbd7", "Rd1"],
            },
            Line {
                key: "four_pawns",
                moves: &["d4", "Nf6", "c4", "g6", "Nc3", "Bg7", "e4", "d6", "f4", "O-O", "Nf3", "c5", "d5", "e6", "Be2", "exd5", "cxd5"],
            },
            Line {
                key: "fianchetto",
                moves: &["d4", "Nf6", "c4", "g6", "Nc3", "Bg7", "g3", "O-O", "Bg2", "d6", "Nf3", "Nbd7", "O-O", "e5", "e4", "c6", "h3"],
            },
        ],
        alternatives: &[],
        description: "A dynamic and aggressive defense (1.d4 Nf6 2.c4 g6 3.Nc3 Bg7) where Black allows White a large pawn center, planning to undermine and attack it later. The King's Indian Defense leads to opposite-side castling and fierce attacking races. It's a favorite of aggressive players and has been employed by world champions like Fischer, Kasparov, and Radjabov. The opening requires precise calculation and attacking intuition.",
    },
    Opening {
        key: "grunfeld",
        name: "Grünfeld Defense",
        trainee: Color::Black,
        main_line: "exchange",
        lines: &[
            Line {
                key: "exchange",
                moves: &["d4", "Nf6", "c4", "g6", "Nc3", "d5", "cxd5", "Nxd5", "e4", "Nxc3", "bxc3", "Bg7", "Nf3", "c5", "Rb1", "O-O", "Be2"],
            },
            Line {
                key: "russian",
                moves: &["d4", "Nf6", "c4", "g6", "Nc3", "d5", "Nf3", "Bg7", "Qb3", "dxc4", "Qxc4", "O-O", "e4", "Bg4", "Be3", "Nfd7", "Qb3"],
            },
            Line {
                key: "classical",
                moves: &["d4", "Nf6", "c4", "g6", "Nc3", "d5", "Nf3", "Bg7", "Qb3", "dxc4", "Qxc4", "O-O", "e4", "Na6", "Be2", "c5", "O-O"],
            },
        ],
        alternatives: &[],
        description: "A hypermodern defense (1.d4 Nf6 2.c4 g6 3.Nc3 d5) that immediately challenges White's center. Named after Austrian grandmaster Ernst Grünfeld, it leads to sharp, double-edged positions where Black often sacrifices the center for piece activity. The Grünfeld requires precise play and tactical awareness. It's been a weapon of world champions like Fischer, Kasparov, and many modern elite players.",
    },
    Opening {
        key: "nimzoindian",
        name: "Nimzo-Indian Defense",
        trainee: Color::Black,
        main_line: "classical",
        lines: &[
            Line {
                key: "classical",
                moves: &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4", "Qc2", "O-O", "a3", "Bxc3+", "Qxc3", "b6", "Bg5", "Bb7", "f3", "d5", "cxd5"],
            },
            Line {
                key: "rubinstein",
                moves: &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4", "e3", "O-O", "Bd3", "d5", "Nf3", "c5", "O-O", "Nc6", "a3", "Bxc3", "bxc3"],
            },
            Line {
                key: "samisch",
                moves: &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4", "a3", "Bxc3+", "bxc3", "c5", "f3", "d5", "cxd5", "Nxd5", "dxc5", "f5", "e4"],
            },
            Line {
                key: "leningrad",
                moves: &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4", "Bg5", "h6", "Bh4", "c5", "d5", "b5", "dxe6", "fxe6", "cxb5", "d5", "e3"],
            },
        ],
        alternatives: &[],
        description: "A sophisticated defense (1.d4 Nf6 2.c4 e6 3.Nc3 Bb4) named after Aron Nimzowitsch, a pioneer of hypermodern chess theory. The Nimzo-Indian pins White's knight and exerts pressure on e4, often leading to strategic battles over central control. It's one of Black's most reliable defenses against 1.d4, offering rich positional play. The opening rewards strategic understanding and has been employed by virtually every world champion.",
    },
    Opening {
        key: "queensgambit",
        name: "Queen's Gambit Declined",
        trainee: Color::Black,
        main_line: "orthodox",
        lines: &[
            Line {
                key: "orthodox",
                moves: &["d4", "d5", "c4", "e6", "Nc3", "Nf6", "Bg5", "Be7", "e3", "O-O", "Nf3", "Nbd7", "Rc1", "c6", "Bd3", "dxc4", "Bxc4"],
            },
            Line {
                key: "tartakower",
                moves: &["d4", "d5", "c4", "e6", "Nc3", "Nf6", "Bg5", "Be7", "e3", "O-O", "Nf3", "h6", "Bh4", "b6", "cxd5", "Nxd5", "Bxe7", "Qxe7"],
            },
            Line {
                key: "exchange",
                moves: &["d4", "d5", "c4", "e6", "Nc3", "Nf6", "cxd5", "exd5", "Bg5", "Be7", "e3", "c6", "Bd3", "Nbd7", "Qc2", "O-O", "Nge2"],
            },
            Line {
                key: "cambridge_springs",
                moves: &["d4", "d5", "c4", "e6", "Nc3", "Nf6", "Bg5", "Nbd7", "e3", "c6", "Nf3", "Qa5", "Nd2", "Bb4", "Qc2", "O-O"],
            },
        ],
        alternatives: &[],
        description: "Despite its name, the Queen's Gambit (1.d4 d5 2.c4) is not a true gambit as Black cannot hold the pawn safely. It's one of the oldest and most respected openings, aiming for central control and piece development. The Queen's Gambit Declined is particularly solid, leading to rich positional battles. This opening rewards strategic understanding, proper piece placement, and long-term planning. It remains popular at all levels of chess.",
    },
    Opening {
        key: "slav",
        name: "Slav Defense",
        trainee: Color::Black,
        main_line: "main",
        lines: &[
            Line {
                key: "main",
                moves: &["d4", "d5", "c4", "c6", "Nf3", "Nf6", "Nc3", "dxc4", "a4", "Bf5", "e3", "e6", "Bxc4", "Bb4", "O-O", "O-O", "Qe2"],
            },
            Line {
                key: "exchange",
                moves: &["d4", "d5", "c4", "c6", "cxd5", "cxd5", "Nc3", "Nf6", "Nf3", "Nc6", "Bf4", "Bf5", "e3", "e6", "Bd3", "Bxd3", "Qxd3"],
            },
            Line {
                key: "semi_slav",
                moves: &["d4", "d5", "c4", "c6", "Nf3", "Nf6", "Nc3", "e6", "e3", "Nbd7", "Qc2", "Bd6", "Bd3", "O-O", "O-O", "dxc4", "Bxc4"],
            },
            Line {
                key: "chameleon",
                moves: &["d4", "d5", "c4", "c6", "Nf3", "Nf6", "Nc3", "a6", "c5", "Nbd7", "Bf4", "Nh5", "Bd2", "Nhf6", "Qc2", "g6", "e4"],
            },
        ],
        alternatives: &[],
        description: "A solid defense (1.d4 d5 2.c4 c6) that supports the d5 pawn while keeping the light-squared bishop active. The Slav Defense offers Black a reliable path to equality with fewer structural weaknesses than the Queen's Gambit Declined. It's popular at all levels for its soundness and strategic clarity. The Slav has many variations ranging from quiet positional play to sharp tactical battles.",
    },
    Opening {
        key: "dutch",
        name: "Dutch Defense",
        trainee: Color::Black,
        main_line: "leningrad",
        lines: &[
            Line {
                key: "leningrad",
                moves: &["d4", "f5", "g3", "Nf6", "Bg2", "g6", "Nf3", "Bg7", "O-O", "O-O", "c4", "d6", "Nc3", "Qe8", "d5", "Na6", "Rb1"],
            },
            Line {
                key: "stonewall",
                moves: &["d4", "f5", "g3", "Nf6", "Bg2", "e6", "Nf3", "Be7", "O-O", "O-O", "c4", "d5", "b3", "c6", "Ba3", "Bxa3", "Nxa3"],
            },
            Line {
                key: "classical",
                moves: &["d4", "f5", "g3", "Nf6", "Bg2", "e6", "Nf3", "Be7", "O-O", "O-O", "c4", "d6", "Nc3", "Qe8", "Qc2", "Qh5", "b3"],
            },
        ],
        alternatives: &[],
        description: "An aggressive defense (1.d4 f5) that immediately stakes a claim to the e4 square and prepares kingside expansion. The Dutch Defense leads to unbalanced positions where Black seeks attacking chances on the kingside while White often targets the weakened king position. It's favored by players seeking complex, fighting positions. The opening requires careful handling but rewards aggressive, attacking play.",
    },
    Opening {
        key: "benoni",
        name: "Benoni Defense",
        trainee: Color::Black,
        main_line: "modern",
        lines: &[
            Line {
                key: "modern",
                moves: &["d4", "Nf6", "c4", "c5", "d5", "e6", "Nc3", "exd5", "cxd5", "d6", "e4", "g6", "Nf3", "Bg7", "Be2", "O-O", "O-O"],
            },
            Line {
                key: "fianchetto",
                moves: &["d4", "Nf6", "c4", "c5", "d5", "e6", "Nc3", "exd5", "cxd5", "d6", "Nf3", "g6", "g3", "Bg7", "Bg2", "O-O", "O-O"],
            },
            Line {
                key: "classical",
                moves: &["d4", "Nf6", "c4", "c5", "d5", "e6", "Nc3", "exd5", "cxd5", "d6", "e4", "g6", "Nf3", "Bg7", "Be2", "O-O", "O-O", "Re8"],
            },
        ],
        alternatives: &[],
        description: "A sharp, counterattacking defense (1.d4 Nf6 2.c4 c5) that creates immediate tension and asymmetrical pawn structures. The Benoni Defense leads to positions where both sides attack on opposite flanks. Black accepts a cramped position for active piece play and queenside counterplay. It's popular among aggressive players who enjoy complex, tactical positions. The Modern Benoni remains a fighting weapon at all levels.",
    },
    Opening {
        key: "pirc",
        name: "Pirc Defense",
        trainee: Color::Black,
        main_line: "austrian",
        lines: &[
            Line {
                key: "austrian",
                moves: &["e4", "d6", "d4", "Nf6", "Nc3", "g6", "f4", "Bg7", "Nf3", "O-O", "Bd3", "Na6", "O-O", "c5", "d5", "Rb8", "Qe1"],
            },
            Line {
                key: "classical",
                moves: &["e4", "d6", "d4", "Nf6", "Nc3", "g6", "Nf3", "Bg7", "Be2", "O-O", "O-O", "Bg4", "Be3", "Nc6", "Qd2", "e5", "dxe5"],
            },
            Line {
                key: "sveshnikov",
                moves: &["e4", "d6", "d4", "Nf6", "Nc3", "g6", "g3", "Bg7", "Bg2", "O-O", "Nge2", "c6", "O-O", "Qa5", "h3", "e5", "Be3"],
            },
        ],
        alternatives: &[],
        description: "A flexible, hypermodern defense (1.e4 d6 2.d4 Nf6 3.Nc3 g6) where Black allows White to establish a pawn center before counterattacking. The Pirc Defense often transposes into similar positions as the King's Indian Defense. It's known for its flexibility and ability to create complex, asymmetrical positions. The opening rewards players who understand pawn breaks and tactical opportunities in closed positions.",
    },
    Opening {
        key: "alekhine",
        name: "Alekhine's Defense",
        trainee: Color::Black,
        main_line: "four_pawns",
        lines: &[
            Line {
                key: "four_pawns",
                moves: &["e4", "Nf6", "e5", "Nd5", "d4", "d6", "c4", "Nb6", "f4", "dxe5", "fxe5", "Nc6", "Be3", "Bf5", "Nc3", "e6", "Nf3"],
            },
            Line {
                key: "modern",
                moves: &["e4", "Nf6", "e5", "Nd5", "d4", "d6", "Nf3", "Bg4", "Be2", "e6", "O-O", "Be7", "c4", "Nb6", "Nc3", "O-O", "Be3"],
            },
            Line {
                key: "exchange",
                moves: &["e4", "Nf6", "e5", "Nd5", "d4", "d6", "c4", "Nb6", "exd6", "cxd6", "Nc3", "g6", "Be3", "Bg7", "Rc1", "O-O", "b3"],
            },
        ],
        alternatives: &[],
        description: "A provocative defense (1.e4 Nf6) named after world champion Alexander Alekhine, where Black's knight invites White's pawns forward. Alekhine's Defense leads to positions where Black aims to demonstrate that White's extended pawn center is a target rather than a strength. It's a sharp, complex opening that requires precise play. The Alekhine is favored by players seeking unbalanced positions with mutual chances.",
    },
    Opening {
        key: "scandinavian",
        name: "Scandinavian Defense",
        trainee: Color::Black,
        main_line: "main",
        lines: &[
            Line {
                key: "main",
                moves: &["e4", "d5", "exd5", "Qxd5", "Nc3", "Qa5", "d4", "Nf6", "Nf3", "Bf5", "Bc4", "e6", "Bd2", "c6", "Nd5", "Qd8", "Nxf6+", "Qxf6"],
            },
            Line {
                key: "modern",
                moves: &["e4", "d5", "exd5", "Nf6", "d4", "Nxd5", "Nf3", "Bg4", "Be2", "e6", "O-O", "Be7", "c4", "Nb6", "Nc3", "O-O", "Be3"],
            },
            Line {
                key: "portuguese",
                moves: &["e4", "d5", "exd5", "Nf6", "d4", "Bg4", "f3", "Bf5", "Bb5+", "Nbd7", "c4", "e6", "Nc3", "exd5", "cxd5", "Bd6"],
            },
        ],
        alternatives: &[],
        description: "One of the oldest recorded openings (1.e4 d5), immediately challenging White's central pawn. The Scandinavian Defense leads to early queen development after 2.exd5 Qxd5, giving White a small lead in development. However, Black gets a solid position with clear development plans. It's popular at club level for its straightforward ideas and reduced theoretical burden. The Scandinavian offers Black a reliable path to playable positions.",
    },
    Opening {
        key: "budapest",
        name: "Budapest Gambit",
        trainee: Color::Black,
        main_line: "main",
        lines: &[
            Line {
                key: "main",
                moves: &["d4", "Nf6", "c4", "e5", "dxe5", "Ng4", "Bf4", "Nc6", "Nf3", "Bb4+", "Nbd2", "Qe7", "e3", "Ngxe5", "Nxe5", "Nxe5", "Be2"],
            },
            Line {
                key: "fajarowicz",
                moves: &["d4", "Nf6", "c4", "e5", "dxe5", "Ne4", "Nf3", "Bb4+", "Nbd2", "Nc6", "a3", "Bxd2+", "Qxd2", "Nc5", "b4", "Ne6"],
            },
            Line {
                key: "adler",
                moves: &["d4", "Nf6", "c4", "e5", "dxe5", "Ng4", "Nf3", "Bc5", "e3", "Nc6", "Nc3", "Ngxe5", "Nxe5", "Nxe5", "Be2", "O-O"],
            },
        ],
        alternatives: &[],
        description: "An aggressive gambit (1.d4 Nf6 2.c4 e5) where Black immediately sacrifices a pawn for rapid development and attacking chances. The Budapest Gambit is relatively rare at the highest level but can be a dangerous surprise weapon. It leads to sharp tactical positions where Black gets active piece play and attacking opportunities if White is unprepared. The gambit requires accurate play from both sides.",
    },
    Opening {
        key: "benko",
        name: "Benko Gambit",
        trainee: Color::Black,
        main_line: "accepted",
        lines: &[
            Line {
                key: "accepted",
                moves: &["d4", "Nf6", "c4", "c5", "d5", "b5", "cxb5", "a6", "bxa6", "g6", "Nc3", "Bxa6", "e4", "Bxf1", "Kxf1", "d6", "Nf3", "Bg7", "g3"],
            },
            Line {
                key: "declined",
                moves: &["d4", "Nf6", "c4", "c5", "d5", "b5", "cxb5", "a6", "b6", "e6", "Nc3", "exd5", "Nxd5", "Nxd5", "Qxd5", "Nc6", "Qd1"],
            },
            Line {
                key: "fianchetto",
                moves: &["d4", "Nf6", "c4", "c5", "d5", "b5", "cxb5", "a6", "bxa6", "g6", "Nc3", "Bxa6", "Nf3", "d6", "g3", "Bg7", "Bg2", "Nbd7"],
            },
        ],
        alternatives: &[],
        description: "A positional pawn sacrifice (1.d4 Nf6 2.c4 c5 3.d5 b5) where Black gives up the b-pawn for long-term queenside pressure and open files. The Benko Gambit (also called Volga Gambit) offers Black excellent compensation through active piece play and strategic pressure. It's popular among players who understand positional compensation and enjoy strategic maneuvering. The Benko can lead to long, complex strategic battles.",
    },
    Opening {
        key: "catalanopening",
        name: "Catalan Opening",
        trainee: Color::White,
        main_line: "open",
        lines: &[
            Line {
                key: "open",
                moves: &["d4", "Nf6", "c4", "e6", "g3", "d5", "Bg2", "dxc4", "Nf3", "Nc6", "Qa4", "Bd7", "Qxc4", "Na5", "Qd3", "c5", "O-O"],
            },
            Line {
                key: "closed",
                moves: &["d4", "Nf6", "c4", "e6", "g3", "d5", "Bg2", "Be7", "Nf3", "O-O", "O-O", "dxc4", "Qc2", "a6", "Qxc4", "b5", "Qc2"],
            },
            Line {
                key: "classical",
                moves: &["d4", "Nf6", "c4", "e6", "g3", "d5", "Bg2", "Be7", "Nf3", "O-O", "O-O", "Nbd7", "Qc2", "c6", "Nbd2", "b6", "e4"],
            },
        ],
        alternatives: &[],
        description: "A sophisticated opening (1.d4 Nf6 2.c4 e6 3.g3) combining ideas from the Queen's Gambit and the fianchetto of the light-squared bishop. Developed in the 1920s, the Catalan creates subtle pressure on Black's queenside. It's a favorite of world champions for its flexibility and long-term positional advantages. The opening often leads to complex strategic battles where understanding pawn structures and piece coordination is crucial.",
    },
    Opening {
        key: "englishopening",
        name: "English Opening",
        trainee: Color::White,
        main_line: "symmetrical",
        lines: &[
            Line {
                key: "symmetrical",
                moves: &["c4", "c5", "Nc3", "Nc6", "g3", "g6", "Bg2", "Bg7", "Nf3", "Nf6", "O-O", "O-O", "d4", "cxd4", "Nxd4", "Nxd4", "Qxd4"],
            },
            Line {
                key: "reversed_sicilian",
                moves: &["c4", "e5", "Nc3", "Nf6", "Nf3", "Nc6", "g3", "d5", "cxd5", "Nxd5", "Bg2", "Nb6", "O-O", "Be7", "d3", "O-O"],
            },
            Line {
                key: "four_knights",
                moves: &["c4", "Nf6", "Nc3", "e5", "Nf3", "Nc6", "g3", "d5", "cxd5", "Nxd5", "Bg2", "Nb6", "O-O", "Be7", "d3", "O-O"],
            },
            Line {
                key: "hedgehog",
                moves: &["c4", "c5", "Nf3", "Nf6", "g3", "b6", "Bg2", "Bb7", "O-O", "e6", "Nc3", "Be7", "d4", "cxd4", "Qxd4", "d6"],
            },
        ],
        alternatives: &[],
        description: "A flexible opening (1.c4) named after Howard Staunton, who used it during the 1843 match in England. The English Opening transposes into many different pawn structures and can lead to reversed Sicilian or King's Indian formations. It's popular among positional players who prefer to dictate the game's character based on Black's response. The opening allows White to avoid main-line theory while maintaining flexibility.",
    },
    Opening {
        key: "reti",
        name: "Réti Opening",
        trainee: Color::White,
        main_line: "main",
        lines: &[
            Line {
                key: "main",
                moves: &["Nf3", "d5", "g3", "Nf6", "Bg2", "e6", "O-O", "Be7", "d3", "O-O", "Nbd2", "c5", "e4", "Nc6", "c3", "b6", "Re1"],
            },
            Line {
                key: "kings_indian",
                moves: &["Nf3", "Nf6", "g3", "g6", "b3", "Bg7", "Bb2", "O-O", "Bg2", "d6", "O-O", "e5", "d3", "Nc6", "Nbd2", "h6"],
            },
            Line {
                key: "reversed_benoni",
                moves: &["Nf3", "Nf6", "c4", "c5", "Nc3", "e6", "g3", "b6", "Bg2", "Bb7", "O-O", "Be7", "d4", "cxd4", "Qxd4"],
            },
        ],
        alternatives: &[],
        description: "A hypermodern opening (1.Nf3) named after Czech grandmaster Richard Réti, who revolutionized opening theory in the 1920s. The Réti Opening controls the center from a distance rather than occupying it with pawns. It's extremely flexible and can transpose into various openings including the English, King's Indian Attack, or Catalan. The Réti rewards players with broad opening knowledge and positional understanding.",
    },
];
