use jocument::{magics, CitedWork, Citations, Footnotes, JocumentStyle, Labels, StyleConfig};

/// Assembles a small report, the way a notebook would: definitions on top,
/// text referring to them in between, listings at the end.
#[test]
fn assemble_report() {
    // arrange
    let mut notes = Footnotes::new();
    notes.add("data", "Daily closes,\nadjusted for splits.");
    notes.add("fees", "Before fees.");

    let mut cites = Citations::new();
    cites.add("markowitz", CitedWork::new("Markowitz", "Portfolio Selection", "JF 1952"));

    let mut figures = Labels::new("Figure");

    // act
    let mut document = String::new();
    document.push_str(&magics::titleblock("Report|Subtitle|Author").expect("Three arguments"));
    document.push_str("<p>Returns");
    document.push_str(&notes.reference("fees"));
    document.push_str(" are shown in ");
    document.push_str(&figures.add("returns", Some("Returns"), true));
    document.push_str(", following ");
    document.push_str(&cites.cite("markowitz"));
    document.push_str(". Source data");
    document.push_str(&notes.reference("data"));
    document.push_str(", see also note ");
    document.push_str(&notes.num("fees"));
    document.push_str(".</p>");
    document.push_str(&figures.add("returns", Some("Returns"), false));
    document.push_str(&notes.output());
    document.push_str(&cites.output());

    // assert
    assert!(document.starts_with("<div class=\"title_block\">"));
    assert!(document.contains("<p>Returns<sup><a id=fnret_1 href=#fn_1>1</a></sup> are shown in <a href=#ref_Figure1>Figure 1</a>, following <a id=citeret_1 href=#cite_1>[1]</a>."));
    assert!(document.contains("Source data<sup><a id=fnret_2 href=#fn_2>2</a></sup>, see also note <a id=fnret_1 href=#fn_1>1</a>.</p>"));
    assert!(document.contains("id=ref_Figure1>Figure 1<br>Returns</div>"));
    assert!(document.contains(concat!(
        "<ol>",
        "<li id=fn_1>Before fees.<a href=#fnret_1>&#8629;</a></li>",
        "<li id=fn_2>Daily closes, adjusted for splits.<a href=#fnret_2>&#8629;</a></li>",
        "</ol>"
    )));
    assert!(document.ends_with(
        "<ol><li id=cite_1><strong>Markowitz</strong>, <em>Portfolio Selection</em>, JF 1952<a href=#citeret_1>&#8629;</a></li></ol>"
    ));
}

#[test]
fn broken_references_do_not_stop_the_document() {
    let mut notes = Footnotes::new();
    let mut cites = Citations::new();
    let mut tables = Labels::new("Table");

    let text = [
        notes.reference("typo"),
        cites.cite("typo"),
        tables.reference("typo"),
        notes.num("typo"),
    ];

    assert_eq!(
        text,
        [
            "<sup>**\"typo\" not found**</sup>",
            "**Citation \"typo\" not found**",
            "**Table \"typo\" not defined**",
            "** Footnote \"typo\" not found**",
        ]
    );
    // still listed, with empty text
    assert_eq!(
        notes.output(),
        "<ol><li id=fn_1><a href=#fnret_1>&#8629;</a></li></ol>"
    );
}

#[test]
fn styles_are_injected() {
    let style = JocumentStyle::with_config(StyleConfig {
        return_glyph: "^".into(),
        ..Default::default()
    });
    let mut notes = Footnotes::with_style(jocument::Footnote, style);
    notes.add("x", "X");
    notes.reference("x");
    assert_eq!(
        notes.output(),
        "<ol><li id=fn_1>X<a href=#fnret_1>^</a></li></ol>"
    );
}

#[test]
fn many_names_keep_order() {
    let mut notes = Footnotes::new();
    let names = (0..50).map(|i| format!("n{i}")).collect::<Vec<_>>();
    for name in names.iter().rev() {
        notes.add(name.clone(), name);
    }
    for name in &names {
        notes.reference(name);
    }
    for (i, name) in names.iter().enumerate().rev() {
        assert_eq!(notes.number(name).map(|n| n.get()), Some(i + 1));
        let expected = format!("<sup><a id=fnret_{0} href=#fn_{0}>{0}</a></sup>", i + 1);
        assert_eq!(notes.reference(name), expected);
    }
    assert_eq!(notes.entries().count(), 50);
}
