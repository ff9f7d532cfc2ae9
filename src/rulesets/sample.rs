//! Sample catalog entries.

use crate::catalog::{Catalog, CatalogBuilder};
use crate::content::{length_label, RichContent};
use crate::core::Result;
use crate::ruleset::Ruleset;

const BLOG: &str = "http://combinatorialgametheory.blogspot.com";
const BURKE_HEARN_2018: &str = "https://doi.org/10.1007/s00182-018-0628-8";
const KOCH_2013: &str = "http://www.sciencedirect.com/science/article/pii/S0304397513001783";

fn blog_post(slug: &str) -> String {
    format!("{BLOG}/{slug}")
}

fn amazons() -> Ruleset {
    let complexity = RichContent::sequence([
        RichContent::link(
            "PSPACE-complete",
            "http://library.msri.org/books/Book56/contents.html",
        ),
        RichContent::text(" even with "),
        RichContent::link(
            "only one amazon apiece",
            "http://citeseerx.ist.psu.edu/viewdoc/summary?doi=10.1.1.103.3374",
        ),
    ]);

    Ruleset::new(
        "Amazons",
        Some("http://en.wikipedia.org/wiki/Game_of_the_Amazons"),
        false,
        length_label(true),
        "?  (I don't know what is considered an Initial Position.)",
        complexity,
        RichContent::blank(),
    )
    .with_brief_description("Queens move around and shoot out spaces.")
    .with_blog_link(blog_post("2009/12/game-description-amazons.html"))
    .with_image("http://webdocs.cs.ualberta.ca/~games/gifs/amsicon.gif")
}

fn atropos() -> Ruleset {
    let conjecture = "Open!  Conjecture: N (\"fuzzy\") iff there are an even number of open circles.";

    let unrestricted = Ruleset::new(
        "Unrestricted Atropos",
        Some("http://www4.wittenberg.edu/academics/mathcomp/kburke/atropos/"),
        true,
        length_label(true),
        conjecture,
        "Open; in PSPACE",
        RichContent::blank(),
    )
    .with_brief_description("Just like Atropos, except you can color anywhere you want on your turn.");

    Ruleset::new(
        "Atropos",
        Some("combGames/atropos.html"),
        true,
        length_label(true),
        conjecture,
        RichContent::link(
            "PSPACE-complete",
            "http://link.springer.com/chapter/10.1007%2F978-3-540-77105-0_49",
        ),
        RichContent::blank(),
    )
    .with_brief_description(
        "Position: triangular array of circles with border pre-colored and last-played circle.  \
         Move: color one uncolored circle any of the three colors.  If there are circles adjacent \
         to the last one, must choose one of them.  Otherwise, play anywhere.",
    )
    .with_playable_link("combGames/atropos.html", "HTML")
    .with_variant(unrestricted)
}

fn chomp() -> Ruleset {
    Ruleset::new(
        "Chomp",
        Some("http://en.wikipedia.org/wiki/Chomp"),
        true,
        length_label(true),
        RichContent::link("First Player", "http://en.wikipedia.org/wiki/Chomp#Who_wins.3F"),
        "In PSPACE",
        RichContent::blank(),
    )
    .with_brief_description(
        "Impartial: choose a cookie/chocolate square on your turn and eat it as well as all the \
         treats above and to the right.  You lose if you eat the poison cookie in the bottom left side.",
    )
    .with_image("http://cp4space.files.wordpress.com/2012/12/chocolate2.png")
    .with_playable_link("http://lpcs.math.msu.su/~pentus/abacus.htm", "Java")
}

fn clobber() -> Ruleset {
    let complexity = RichContent::sequence([
        RichContent::link(
            "NP-hard",
            "http://www.emis.de/journals/INTEGERS/papers/a1int2003/a1int2003.pdf",
        ),
        RichContent::LineBreak,
        RichContent::text("In PSPACE"),
    ]);

    let anti_clobber = Ruleset::new(
        "Anti-Clobber",
        None,
        false,
        length_label(true),
        "?",
        "In PSPACE",
        "All-Small",
    )
    .with_brief_description("Instead of clobbering the opposing piece, you remove your piece instead.");

    Ruleset::new(
        "Clobber",
        Some("http://www.iggamecenter.com/info/en/clobber.html"),
        false,
        length_label(true),
        "?",
        complexity,
        "All-Small",
    )
    .with_brief_description(
        "Each turn, you choose a piece adjacent to an opposing piece and \"clobber\" that piece \
         by moving there and capturing it.",
    )
    .with_image("https://project.dke.maastrichtuniversity.nl/games/images/games_clobber.gif")
    .with_playable_link("combGames/clobber.html", "HTML")
    .with_playable_link("http://www.gottfriedville.net/games/clobber/", "Java")
    .with_variant(anti_clobber)
}

fn col() -> Ruleset {
    let complexity = RichContent::sequence([
        RichContent::text("PSPACE-complete on both "),
        RichContent::link(
            "uncolored non-planar graphs",
            "https://eccc.weizmann.ac.il/report/2015/021/",
        ),
        RichContent::text(" and "),
        RichContent::link("partially-colored planar graphs", BURKE_HEARN_2018),
    ]);
    let other = RichContent::link(
        "Each value is a number or a number plus *",
        "https://en.wikipedia.org/wiki/Winning_Ways_for_your_Mathematical_Plays",
    );

    let proper = Ruleset::new(
        "Proper-k-Coloring",
        Some(KOCH_2013),
        true,
        length_label(true),
        "No common initial position.",
        RichContent::link("PSPACE-complete", KOCH_2013),
        RichContent::blank(),
    )
    .with_brief_description("Impartial graph coloring game with k colors.");

    let oriented = Ruleset::new(
        "Oriented-k-Coloring",
        Some(KOCH_2013),
        true,
        length_label(true),
        "No common initial position.",
        RichContent::link("PSPACE-complete", KOCH_2013),
        RichContent::blank(),
    )
    .with_brief_description("Impartial oriented graph coloring game with k colors.");

    Ruleset::new(
        "Col",
        Some("https://en.wikipedia.org/wiki/Col_%28game%29"),
        false,
        length_label(true),
        "No common initial position.",
        complexity,
        other,
    )
    .with_brief_description(
        "Partisan graph coloring game.  Alternate painting your color, but not adjacent to yourself.",
    )
    .with_image("http://upload.wikimedia.org/wikipedia/commons/b/bc/ColAndSnortGraph_C_end.png")
    .with_playable_link("http://www.fwend.com/gameofcol.htm", "Java")
    .with_variant(proper)
    .with_variant(oriented)
}

fn domineering() -> Ruleset {
    Ruleset::new(
        "Domineering",
        Some("http://en.wikipedia.org/wiki/Domineering"),
        false,
        length_label(true),
        RichContent::link(
            "Varies",
            "http://webdocs.cs.ualberta.ca/~games/domineering/updated.html",
        ),
        "In PSPACE",
        RichContent::blank(),
    )
    .with_image("http://webdocs.cs.ualberta.ca/~games/domineering/b1.gif")
    .with_brief_description(
        "Turn: add a domino to two adjacent checkerboard squares.  Left plays vertical dominoes, \
         Right horizontal.",
    )
    .with_blog_link(blog_post("2010/02/game-description-domineering.html"))
    .with_playable_link("combGames/domineering.html", "HTML")
    .with_alias("Crosscram")
}

fn hackenbush() -> Ruleset {
    Ruleset::new(
        "Hackenbush",
        Some("https://en.wikipedia.org/wiki/Hackenbush"),
        false,
        length_label(true),
        "?",
        RichContent::unpublished("NP-hard"),
        "Hard even without green edges.",
    )
    .with_image(
        "https://upload.wikimedia.org/wikipedia/commons/thumb/f/f4/Hackenbush_girl.svg/495px-Hackenbush_girl.svg.png",
    )
    .with_brief_description(
        "Position: (planar?) graph with red, green, and blue edges with some vertices attached to \
         the ground line.  Move: erase a green edge or an edge of your color, then destroy any \
         edges no longer connected to the ground.",
    )
}

fn hex() -> Ruleset {
    Ruleset::new(
        "Hex",
        Some("http://web.ukonline.co.uk/arthur.vause/Hex.html"),
        false,
        length_label(true),
        "No Pie Rule: First Player;  With Pie Rule: Previous Player",
        RichContent::link("PSPACE-complete", "http://maarup.net/thomas/hex/"),
        "This version is Dicotic.",
    )
    .with_image(
        "http://upload.wikimedia.org/wikipedia/commons/thumb/e/e9/Hex_board_11x11.svg/300px-Hex_board_11x11.svg.png",
    )
    .with_playable_link("http://www.mazeworks.com/hex7/index.htm", "Java")
    .with_brief_description(
        "On diamond-shaped hexagonal grid, two opposite sides colored blue and two red.  Players \
         take turns coloring hexagons.  Once a player has created a contiguous path connecting \
         their two sides, no more moves can be made.",
    )
}

fn nim() -> Ruleset {
    let antonim = Ruleset::new(
        "Antonim",
        None,
        true,
        length_label(true),
        "?",
        "In EXPTIME",
        RichContent::blank(),
    )
    .with_brief_description(
        "Position: set of piles instead of a multiset.  Same as Nim, but if two or more piles have \
         the same size, one is dropped.",
    );

    let circular = Ruleset::new(
        "Circular Nim",
        Some("http://www.combinatorics.org/ojs/index.php/eljc/article/view/v20i2p22"),
        true,
        length_label(true),
        "?",
        "In EXPTIME",
        RichContent::blank(),
    )
    .with_brief_description(
        "n stacks of tokens placed in a circle.  A move consists of choosing k consecutive stacks, \
         and taking at least one token from one or more of the k stacks.",
    );

    let gales = Ruleset::new(
        "Gale's Nim",
        None,
        true,
        length_label(true),
        "?",
        "In EXPTIME",
        RichContent::blank(),
    )
    .with_brief_description(
        "Gale's Nim (X, Y) is the same as Nim played on X heaps, except that the game ends when \
         there are only Y remaining non-zero piles.",
    );

    Ruleset::new(
        "Nim",
        Some("http://en.wikipedia.org/wiki/Nim"),
        true,
        length_label(true),
        "By XOR-rule.",
        RichContent::link("In P", "http://en.wikipedia.org/wiki/Nim#Mathematical_theory"),
        RichContent::blank(),
    )
    .with_alias("Sticks (misere)")
    .with_image("http://ljkrakauer.com/LJK/60s/marienbadgame.jpg")
    .with_brief_description(
        "Position: piles of sticks.  Move: choose one pile and remove any number of sticks from it.",
    )
    .with_playable_link(
        "http://www.archimedes-lab.org/game_nim/play_nim_game.html",
        "JavaScript",
    )
    .with_variant(antonim)
    .with_variant(circular)
    .with_variant(gales)
}

/// Add the sample rulesets to a builder, alphabetically.
pub fn add_sample_rulesets(builder: &mut CatalogBuilder) -> Result<()> {
    builder.extend([
        amazons(),
        atropos(),
        chomp(),
        clobber(),
        col(),
        domineering(),
        hackenbush(),
        hex(),
        nim(),
    ])
}

/// Build a catalog holding only the sample rulesets.
pub fn sample_catalog() -> Result<Catalog> {
    let mut builder = CatalogBuilder::new();
    add_sample_rulesets(&mut builder)?;
    Ok(builder.build())
}
