/*!
# Matrix Format

Readers and writers for the **adjacency-matrix format**.

A matrix file consists of:
- a line holding the number of nodes `n`, and
- `n` non-comment lines of `n` whitespace-separated edge multiplicities.

Lines starting with a configurable **comment identifier** (default: `"c"`)
are ignored. The matrix must be symmetric; the diagonal holds self-loop
counts (see [`FromAdjacencyMatrix`]).

# Examples

## Reading a graph
```
use eulertour::prelude::*;
use eulertour::io::*;
use std::io::Cursor;

let data = b"c a triangle\n3\n0 1 1\n1 0 1\n1 1 0\n";
let cursor = Cursor::new(&data[..]);

let g: AdjArrayMulti = MatrixReader::new().try_read_graph(cursor).unwrap();

assert_eq!(g.number_of_nodes(), 3);
assert_eq!(g.number_of_edges(), 3);
```

## Writing a graph
```
use eulertour::prelude::*;
use eulertour::io::*;
use std::io::Cursor;

let mut g = AdjArrayMulti::new(2);
g.add_edge(0, 1);

let mut buffer = Cursor::new(Vec::new());
g.try_write_matrix(&mut buffer).unwrap();

let output = String::from_utf8(buffer.into_inner()).unwrap();
assert_eq!(output, "2\n0 1\n1 0\n");
```
*/

use std::io::ErrorKind;

use itertools::Itertools;

use super::*;
use crate::prelude::*;

/// A configurable reader for the **adjacency-matrix format**.
///
/// Parses the node-count line and the matrix rows, while skipping comment
/// lines starting with a given identifier (default: `"c"`).
#[derive(Debug, Clone)]
pub struct MatrixReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for MatrixReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl MatrixReader {
    /// Creates a new [`MatrixReader`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the identifier used for detecting comment lines.
    ///
    /// Default is `"c"`.
    pub fn set_comment_identifier<S>(&mut self, c: S)
    where
        S: Into<String>,
    {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier, consuming and returning `self` for chaining.
    ///
    /// # Example
    /// ```
    /// use eulertour::io::*;
    ///
    /// let reader = MatrixReader::new()
    ///     .comment_identifier("%");
    /// ```
    pub fn comment_identifier<S>(mut self, c: S) -> Self
    where
        S: Into<String>,
    {
        self.set_comment_identifier(c);
        self
    }

    /// Returns the next non-comment-line if it exists or propagates an error
    fn next_non_comment_line<B>(&self, lines: &mut std::io::Lines<B>) -> Result<Option<String>>
    where
        B: BufRead,
    {
        loop {
            match lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.starts_with(&self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    /// Parses one whitespace-separated row of edge multiplicities
    fn parse_row(line: &str) -> Result<Vec<NumEdges>> {
        line.split_whitespace()
            .map(|v| {
                v.parse::<NumEdges>().map_err(|_| {
                    io_error!(
                        ErrorKind::InvalidData,
                        format!("Invalid value found. Cannot parse {v}.")
                    )
                })
            })
            .collect()
    }
}

impl<G> GraphReader<G> for MatrixReader
where
    G: FromAdjacencyMatrix,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = reader.lines();

        let header = self
            .next_non_comment_line(&mut lines)?
            .ok_or(io_error!(ErrorKind::NotFound, "Node count not found"))?;
        let n: usize = {
            let mut tokens = header.split_whitespace();
            let value = tokens.next().and_then(|t| t.parse().ok());
            raise_error_unless!(
                value.is_some() && tokens.next().is_none(),
                ErrorKind::InvalidData,
                format!("Invalid node count line: {header:?}")
            );
            value.unwrap()
        };

        let mut matrix = Vec::with_capacity(n);
        for row in 0..n {
            let line = self.next_non_comment_line(&mut lines)?;
            raise_error_unless!(
                line.is_some(),
                ErrorKind::InvalidData,
                format!("Premature end of input: expected {n} matrix rows, found {row}.")
            );

            matrix.push(Self::parse_row(&line.unwrap())?);
        }

        G::try_from_matrix(&matrix).map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))
    }
}

/// Trait for creating graphs from the **adjacency-matrix format**.
///
/// Provides shorthand methods for reading graphs using the default
/// [`MatrixReader`] settings.
pub trait MatrixRead: Sized {
    /// Tries to read a graph from a given buffered reader in matrix format.
    ///
    /// # Errors
    /// Returns an error if the input cannot be parsed as a valid symmetric
    /// adjacency matrix.
    fn try_read_matrix<R>(reader: R) -> Result<Self>
    where
        R: BufRead;

    /// Tries to read a graph from a file on disk in matrix format.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or is not a valid matrix file.
    fn try_read_matrix_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_read_matrix(BufReader::new(File::open(path)?))
    }
}

impl<G> MatrixRead for G
where
    G: FromAdjacencyMatrix,
{
    fn try_read_matrix<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        MatrixReader::default().try_read_graph(reader)
    }
}

/// A writer for exporting graphs in the **adjacency-matrix format**.
#[derive(Debug, Clone, Default)]
pub struct MatrixWriter;

impl MatrixWriter {
    /// Creates a new [`MatrixWriter`]
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for MatrixWriter
where
    G: ToAdjacencyMatrix,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let matrix = graph.to_matrix();
        writeln!(writer, "{}", matrix.len())?;

        for row in &matrix {
            writeln!(writer, "{}", row.iter().join(" "))?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the **adjacency-matrix format**.
///
/// Provides shorthand methods using the default [`MatrixWriter`] settings.
pub trait MatrixWrite {
    /// Tries to write the graph to a given writer in matrix format.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., due to I/O issues).
    fn try_write_matrix<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file on disk in matrix format.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or written to.
    fn try_write_matrix_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_matrix(BufWriter::new(File::create(path)?))
    }
}

impl<G> MatrixWrite for G
where
    G: ToAdjacencyMatrix,
{
    fn try_write_matrix<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        MatrixWriter::default().try_write_graph(self, writer)
    }
}
