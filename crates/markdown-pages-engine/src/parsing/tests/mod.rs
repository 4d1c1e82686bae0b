//! Document-level tests for the parsing module.


use pretty_assertions::assert_eq;

use crate::error::{ParseError, RenderError};
use crate::parsing::{
    extract_title,
    inline::{SpanKind, TextSpan, text_to_spans},
    markdown_to_blocks, markdown_to_html, markdown_to_tree,
};

#[test]
fn blocks_split_on_blank_lines() {
    let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
";
    assert_eq!(
        markdown_to_blocks(md),
        vec![
            "This is **bolded** paragraph",
            "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
            "- This is a list\n- with items",
        ]
    );
}

#[test]
fn blocks_drop_whitespace_only_pieces() {
    assert_eq!(markdown_to_blocks("a\n\n   \n\n\n\nb\n"), vec!["a", "b"]);
}

#[test]
fn paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here
";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn code_block() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff\n</code></pre></div>"
    );
}

#[test]
fn ordered_list() {
    let md = "
1. First item
2. Second item
3. Third item
";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @"<div><ol><li>First item</li><li>Second item</li><li>Third item</li></ol></div>"
    );
}

#[test]
fn unordered_list() {
    let md = "
- First item
- Second item
- Third item
";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @"<div><ul><li>First item</li><li>Second item</li><li>Third item</li></ul></div>"
    );
}

#[test]
fn quote() {
    let md = "
> Dorothy followed her through many of the beautiful rooms in her castle.
>
> The Witch bade her clean the pots and kettles and sweep the floor and keep the fire fed with wood.
";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @"<div><blockquote>Dorothy followed her through many of the beautiful rooms in her castle. The Witch bade her clean the pots and kettles and sweep the floor and keep the fire fed with wood.</blockquote></div>"
    );
}

#[test]
fn headings_of_every_level() {
    let md = "
# Heading **level** 1

## Heading level 2

### Heading level 3

#### Heading level 4

##### Heading level 5

###### Heading level 6
";
    insta::assert_snapshot!(
        markdown_to_html(md).unwrap(),
        @"<div><h1>Heading <b>level</b> 1</h1><h2>Heading level 2</h2><h3>Heading level 3</h3><h4>Heading level 4</h4><h5>Heading level 5</h5><h6>Heading level 6</h6></div>"
    );
}

#[test]
fn mixed_blocks() {
    let md = "
I am a paragraph with an **important word** and a [link](https://www.example.com)!

# I am a level 1 heading

```
Here is some code and
a _word_ in italic
```

1. First item
2. Second item
3. Third item

> I am a quote.
>
> I am another quote.
";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        concat!(
            r#"<div><p>I am a paragraph with an <b>important word</b> and a <a href="https://www.example.com">link</a>!</p>"#,
            "<h1>I am a level 1 heading</h1>",
            "<pre><code>Here is some code and\na _word_ in italic\n</code></pre>",
            "<ol><li>First item</li><li>Second item</li><li>Third item</li></ol>",
            "<blockquote>I am a quote. I am another quote.</blockquote></div>",
        )
    );
}

#[test]
fn empty_document_is_an_empty_root() {
    let tree = markdown_to_tree("\n\n").unwrap();
    assert_eq!(tree.tag(), Some("div"));
    assert!(tree.children().is_empty());
    assert_eq!(tree.to_html(), "<div></div>");
}

#[test]
fn two_paragraphs() {
    let tree = markdown_to_tree("A\n\nB").unwrap();
    let tags: Vec<_> = tree.children().iter().map(|c| c.tag()).collect();
    assert_eq!(tags, vec![Some("p"), Some("p")]);
    assert_eq!(tree.to_html(), "<div><p>A</p><p>B</p></div>");
}

#[test]
fn child_count_matches_blocks_plus_extra_heading_lines() {
    // 4 blocks, one of which holds 3 heading lines.
    let md = "intro\n\n# a\n## b\n### c\n\n- x\n- y\n\n> q";
    let tree = markdown_to_tree(md).unwrap();
    assert_eq!(tree.children().len(), 4 - 1 + 3);
}

#[test]
fn plain_text_round_trips_to_one_span() {
    let md = "just some words\nacross two lines";
    let blocks = markdown_to_blocks(md);
    assert_eq!(blocks.len(), 1);
    let spans = text_to_spans(&blocks[0].replace('\n', " ")).unwrap();
    assert_eq!(spans, vec![TextSpan::plain("just some words across two lines")]);
}

#[test]
fn serialization_is_idempotent() {
    let tree = markdown_to_tree("# T\n\nSome *text* and `code`").unwrap();
    assert_eq!(tree.to_html(), tree.clone().to_html());
}

#[test]
fn malformed_inline_aborts_the_document() {
    let err = markdown_to_html("fine paragraph\n\nbroken `code").unwrap_err();
    assert_eq!(
        err,
        RenderError::Parse(ParseError::UnbalancedDelimiter {
            delimiter: "`".to_string(),
            text: "broken `code".to_string(),
        })
    );
}

#[test]
fn malformed_link_aborts_the_document() {
    assert_eq!(
        markdown_to_html("fine paragraph\n\npara [open"),
        Err(RenderError::Parse(ParseError::MalformedInlineSyntax {
            kind: SpanKind::Link,
            text: "para [open".to_string(),
            reason: "unclosed `[`",
        }))
    );
}

#[test]
fn underscore_bold_resolves_before_italic() {
    assert_eq!(
        markdown_to_html("__bold__ and _it_").unwrap(),
        "<div><p><b>bold</b> and <i>it</i></p></div>"
    );
}

#[test]
fn title_from_first_h1() {
    assert_eq!(extract_title("# Hello").unwrap(), "Hello");
    assert_eq!(
        extract_title("## Not this\n\n#  Tolkien Fan Club  \n\nbody").unwrap(),
        "Tolkien Fan Club"
    );
}

#[test]
fn title_runs_to_blank_line() {
    assert_eq!(
        extract_title("intro\n# Long\ntitle\n\nbody").unwrap(),
        "Long\ntitle"
    );
}

#[test]
fn missing_title() {
    assert_eq!(
        extract_title("no heading\n\n## only h2\n\n#notitle"),
        Err(ParseError::MissingTitle)
    );
}
