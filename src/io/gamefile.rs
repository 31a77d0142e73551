//! World-state document reading and grid node extraction
//!
//! Promotes the game's serialized session XML into decoded island grids.
//! Game strings may contain numeric character references that would expand
//! into control characters; they are rewritten to a bracketed literal form
//! before the document is parsed.

use std::path::Path;

use log::info;
use roxmltree::{Document, Node};

use crate::classify::IslandGrids;
use crate::decode::{SparseBlock, parse_byte_grid, parse_double_value_grid, parse_sparse_grid};
use crate::grid::Grid;
use crate::io::configuration::{AREA_IDS_PATH, RIVER_GRID_PATH, WATER_PATH};
use crate::io::error::{ExtractError, Result, fs_error};

/// Rewrite `&#NNN;` numeric character references to `[#NNN;]`
///
/// Alphanumeric reference names with or without the terminating semicolon
/// are covered; anything else passes through unchanged.
pub fn sanitize_character_references(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(current) = chars.next() {
        if current == '&' && chars.peek() == Some(&'#') {
            chars.next();
            let mut name = String::new();
            while let Some(&next) = chars.peek() {
                if next.is_ascii_alphanumeric() {
                    name.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if name.is_empty() {
                output.push('&');
                output.push('#');
            } else {
                if chars.peek() == Some(&';') {
                    chars.next();
                }
                output.push_str("[#");
                output.push_str(&name);
                output.push_str(";]");
            }
        } else {
            output.push(current);
        }
    }
    output
}

/// Load a world-state file and extract its island grids
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, an XML error if
/// the sanitized document is not well-formed, and any extraction error of
/// [`island_grids_from_document`].
pub fn load_island_grids(path: &Path) -> Result<IslandGrids> {
    let raw = std::fs::read_to_string(path).map_err(|err| fs_error(path, "read", err))?;
    let sanitized = sanitize_character_references(&raw);
    let document = Document::parse(&sanitized)?;
    info!("loaded world-state document '{}'", path.display());
    island_grids_from_document(&document)
}

/// Extract the three island grids from a parsed world-state document
///
/// Dimension agreement between the buildable-area, river and water nodes is
/// checked before any grid data is decoded.
///
/// # Errors
///
/// Returns [`ExtractError::MissingNode`] for absent nodes or fields,
/// [`ExtractError::DimensionMismatch`] if the node dimensions disagree, and
/// any decoding error of the node payloads.
pub fn island_grids_from_document(document: &Document<'_>) -> Result<IslandGrids> {
    let root = document.root_element();
    let area = descend(root, AREA_IDS_PATH)?;
    let river = descend(root, RIVER_GRID_PATH)?;
    let water = descend(root, WATER_PATH)?;

    let area_dims = node_dimensions(area, AREA_IDS_PATH)?;
    let river_dims = node_dimensions(river, RIVER_GRID_PATH)?;
    let water_dims = node_dimensions(water, WATER_PATH)?;
    if area_dims != river_dims || area_dims != water_dims {
        return Err(ExtractError::DimensionMismatch {
            area: area_dims,
            river: river_dims,
            water: water_dims,
        });
    }

    let (width, height) = area_dims;
    let buildable = parse_area_ids(area, width, height)?;
    let river_grid = parse_byte_grid(child_text(river, "bits", RIVER_GRID_PATH)?, width, height)?;
    let land_mask = parse_byte_grid(child_text(water, "bits", WATER_PATH)?, width, height)?;
    IslandGrids::new(buildable, land_mask, river_grid)
}

/// Decode the buildable-area node, selecting the sparse or plain encoding
fn parse_area_ids(area: Node<'_, '_>, width: usize, height: usize) -> Result<Grid> {
    let sparse = optional_child_text(area, "SparseEnabled").map(str::trim) == Some("1");
    if sparse {
        let blocks = area
            .children()
            .filter(|child| child.has_tag_name("block"))
            .map(sparse_block)
            .collect::<Result<Vec<SparseBlock>>>()?;
        info!("buildable area uses the sparse encoding ({} blocks)", blocks.len());
        parse_sparse_grid(width, height, &blocks)
    } else {
        parse_double_value_grid(child_text(area, "val", AREA_IDS_PATH)?, width, height)
    }
}

/// Convert one `block` child node into its sparse block variant
///
/// The `mode` field discriminates: `1` begins a region, `0` ends it, `2` is
/// a uniform fill, and an absent mode carries explicit values.
fn sparse_block(node: Node<'_, '_>) -> Result<SparseBlock> {
    match optional_child_text(node, "mode").map(str::trim) {
        Some("1") => Ok(SparseBlock::BeginRegion {
            width: parse_count(child_text(node, "x", "block")?)?,
            height: parse_count(child_text(node, "y", "block")?)?,
        }),
        Some("0") => Ok(SparseBlock::EndRegion),
        Some("2") => Ok(SparseBlock::Uniform {
            x: offset(node, "x")?,
            y: offset(node, "y")?,
            default: child_text(node, "default", "block")?.to_string(),
        }),
        None => Ok(SparseBlock::Explicit {
            x: offset(node, "x")?,
            y: offset(node, "y")?,
            values: child_text(node, "values", "block")?.to_string(),
        }),
        Some(other) => Err(ExtractError::InvalidToken {
            value: other.to_string(),
            expected: "sparse block mode in {0, 1, 2}",
        }),
    }
}

/// A block's `x`/`y` offset field, absent fields defaulting to zero
fn offset(node: Node<'_, '_>, name: &str) -> Result<usize> {
    optional_child_text(node, name)
        .map_or(Ok(0), parse_count)
}

/// Read a node's `x`/`y` dimension fields as `(width, height)`
fn node_dimensions(node: Node<'_, '_>, path: &str) -> Result<(usize, usize)> {
    let width = parse_count(child_text(node, "x", path)?)?;
    let height = parse_count(child_text(node, "y", path)?)?;
    Ok((width, height))
}

/// Walk a `/`-separated element path from `root`
fn descend<'a, 'input>(root: Node<'a, 'input>, path: &str) -> Result<Node<'a, 'input>> {
    let mut node = root;
    for segment in path.split('/') {
        node = node
            .children()
            .find(|child| child.has_tag_name(segment))
            .ok_or_else(|| ExtractError::MissingNode {
                path: path.to_string(),
            })?;
    }
    Ok(node)
}

/// Text content of a required child element
fn child_text<'a>(node: Node<'a, '_>, name: &str, path: &str) -> Result<&'a str> {
    optional_child_text(node, name).ok_or_else(|| ExtractError::MissingNode {
        path: format!("{path}/{name}"),
    })
}

/// Text content of an optional child element
fn optional_child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
}

/// Parse a non-negative integer field
fn parse_count(text: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| ExtractError::InvalidToken {
            value: text.trim().to_string(),
            expected: "non-negative integer",
        })
}

#[cfg(test)]
mod tests {
    use super::sanitize_character_references;

    #[test]
    fn test_numeric_references_are_bracketed() {
        assert_eq!(
            sanitize_character_references("name &#10; tail"),
            "name [#10;] tail"
        );
    }

    #[test]
    fn test_unterminated_references_are_bracketed() {
        assert_eq!(sanitize_character_references("&#xA7end"), "[#xA7end;]");
    }

    #[test]
    fn test_plain_ampersands_pass_through() {
        assert_eq!(
            sanitize_character_references("a &amp; b &# c"),
            "a &amp; b &# c"
        );
    }
}
