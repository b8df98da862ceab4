//! Scope-tracked text assembler for one declaration.

use super::{CodeBuilder, Indent};
use crate::{Error, Result};

/// Something opened on a piece that must be closed in reverse order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// `{` ... `}`
    Scope,
    /// Bare extra indentation (continuation lines).
    Indent,
}

/// One declaration/definition pair.
///
/// A piece has an optional signature (used for the forward declaration), an
/// optional head that replaces the signature in the forward declaration
/// (e.g. to carry default arguments), and a body assembled line by line.
///
/// Three flavours exist:
///
/// - [`Piece::new`] is *auto-scoped*: the body opens with `{` at
///   construction and [`build`](Piece::build) closes it along with any scope
///   still open.
/// - [`Piece::flat`] has no signature; its text is emitted verbatim and it
///   is skipped in the forward-declaration block.
/// - [`Piece::declaration`] is declaration-only: it only appears in the
///   forward-declaration block.
///
/// Opens and closes must balance: closing something that is not open, or
/// building a piece that is not auto-scoped with scopes still open, is a
/// [`Error::ScopeImbalance`].
///
/// # Example
///
/// ```
/// use tagforge_codegen::Piece;
///
/// let mut piece = Piece::new("int sign(int v)");
/// piece.line("if (v < 0)");
/// piece.open_scope();
/// piece.line("return -1;");
/// piece.close_scope()?;
/// piece.line("return 1;");
///
/// assert_eq!(
///     piece.build()?,
///     "int sign(int v)\n{\n    if (v < 0)\n    {\n        return -1;\n    }\n    return 1;\n}\n"
/// );
/// # Ok::<(), tagforge_codegen::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Piece {
    signature: Option<String>,
    head: Option<String>,
    code: CodeBuilder,
    base: usize,
    frames: Vec<Frame>,
    auto_scoped: bool,
    definition: bool,
}

impl Piece {
    /// An auto-scoped definition at top level.
    pub fn new(signature: impl Into<String>) -> Self {
        Self::nested(signature, 0)
    }

    /// An auto-scoped definition whose signature sits at `level`, for pieces
    /// that are spliced into another piece's body.
    pub fn nested(signature: impl Into<String>, level: usize) -> Self {
        let mut code = CodeBuilder::default().at_level(level);
        code.push_line("{").push_indent();

        Self {
            signature: Some(signature.into()),
            head: None,
            code,
            base: level,
            frames: Vec::new(),
            auto_scoped: true,
            definition: true,
        }
    }

    /// A piece without signature; its text is emitted as is.
    pub fn flat() -> Self {
        Self {
            signature: None,
            head: None,
            code: CodeBuilder::default(),
            base: 0,
            frames: Vec::new(),
            auto_scoped: false,
            definition: true,
        }
    }

    /// A flat piece holding `text`.
    pub fn from_text(text: &str) -> Self {
        let mut piece = Self::flat();
        piece.raw(text);
        piece
    }

    /// A declaration without body (`static char const X[] = "..."`).
    pub fn declaration(signature: impl Into<String>) -> Self {
        Self {
            signature: Some(signature.into()),
            definition: false,
            ..Self::flat()
        }
    }

    /// Use `head` instead of the signature in the forward declaration.
    pub fn with_head(mut self, head: impl Into<String>) -> Self {
        self.head = Some(head.into());
        self
    }

    /// Add a line at the current indentation.
    pub fn line(&mut self, text: &str) -> &mut Self {
        self.code.push_line(text);
        self
    }

    /// Add a bare newline; also ends a line started with
    /// [`indented`](Self::indented).
    pub fn blank(&mut self) -> &mut Self {
        self.code.push_blank();
        self
    }

    /// Start a logical line: indentation plus `text`, no newline.
    pub fn indented(&mut self, text: &str) -> &mut Self {
        self.code.push_indented(text);
        self
    }

    /// Append unindented text to the current logical line.
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.code.push_raw(text);
        self
    }

    /// Indent following lines without opening a scope.
    pub fn indent(&mut self) -> &mut Self {
        self.frames.push(Frame::Indent);
        self.code.push_indent();
        self
    }

    /// Undo the matching [`indent`](Self::indent).
    pub fn dedent(&mut self) -> Result<&mut Self> {
        self.pop(Frame::Indent, "dedent")?;
        self.code.push_dedent();
        Ok(self)
    }

    /// Emit `{` and indent.
    pub fn open_scope(&mut self) -> &mut Self {
        self.code.push_line("{").push_indent();
        self.frames.push(Frame::Scope);
        self
    }

    /// Dedent and emit `}`.
    pub fn close_scope(&mut self) -> Result<&mut Self> {
        self.pop(Frame::Scope, "close_scope")?;
        self.code.push_dedent().push_line("}");
        Ok(self)
    }

    fn pop(&mut self, expected: Frame, op: &str) -> Result<()> {
        match self.frames.last().copied() {
            Some(frame) if frame == expected => {
                self.frames.pop();
                Ok(())
            }
            Some(frame) => Err(self.imbalance(format!(
                "{op} while the innermost open frame is {frame:?}"
            ))),
            None => Err(self.imbalance(format!("{op} with nothing open"))),
        }
    }

    fn imbalance(&self, detail: String) -> Error {
        Error::ScopeImbalance {
            piece: self.label().to_string(),
            detail,
        }
    }

    /// Signature for error messages and logs.
    pub fn label(&self) -> &str {
        self.signature.as_deref().unwrap_or("<flat piece>")
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// The forward declaration text: the head if set, else the signature.
    pub fn head(&self) -> Option<&str> {
        self.head.as_deref().or(self.signature.as_deref())
    }

    /// False for declaration-only pieces.
    pub fn is_definition(&self) -> bool {
        self.definition
    }

    pub fn is_auto_scoped(&self) -> bool {
        self.auto_scoped
    }

    /// Current indentation level of the body.
    pub fn level(&self) -> usize {
        self.code.current_indent()
    }

    /// Number of scopes and indents not yet closed.
    pub fn open_frames(&self) -> usize {
        self.frames.len()
    }

    /// The body text assembled so far, without closing anything.
    pub fn body(&self) -> &str {
        self.code.as_str()
    }

    /// Render signature and body.
    ///
    /// Auto-scoped pieces close every frame still open, then their own
    /// scope. Any other piece with open frames is a scope imbalance.
    pub fn build(&self) -> Result<String> {
        if !self.auto_scoped && !self.frames.is_empty() {
            return Err(self.imbalance(format!(
                "{} frame(s) still open at build",
                self.frames.len()
            )));
        }

        let mut code = self.code.clone();
        for frame in self.frames.iter().rev() {
            code.push_dedent();
            if *frame == Frame::Scope {
                code.push_line("}");
            }
        }
        if self.auto_scoped {
            code.push_dedent().push_line("}");
        }

        let mut out = String::new();
        if let Some(signature) = &self.signature {
            out.push_str(&Indent::default().prefix(self.base));
            out.push_str(signature);
            out.push('\n');
        }
        out.push_str(code.as_str());
        Ok(out)
    }
}
