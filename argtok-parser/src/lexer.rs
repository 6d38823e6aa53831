//! A lexer for generating classified tokens from a command line.

/// Classification attached to each token pulled from the argument stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TokenKind {
    /// The invoked command name, by convention the first argument.
    Command,

    /// A long option (e.g. --verbose).
    LongOption,

    /// A short option (e.g. -v), or one element of a cluster (e.g. -xvf).
    ShortOption,

    /// A value bound to the preceding option, either from a `name=value`
    /// form or from a bare argument attached to a cluster.
    OptionValue,

    /// A plain argument.
    PositionalArg,

    /// The literal `--` separator.
    EndOfOptions,
}

/// Defines a `Token` that has been read from the command line.
///
/// The text is a borrowed sub-slice of the original argument: option tokens
/// carry neither their leading hyphens nor the `=` separator, and the input
/// must outlive every token pulled from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Token<'a> {
    /// How the argument, or argument piece, was classified.
    pub kind: TokenKind,

    /// The token text, aliasing the original argument list.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Build a token over a slice of the original input.
    #[inline(always)]
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Token { kind, text }
    }
}

impl Token<'_> {
    /// Evaluate if the argument string is the end-of-options marker.
    #[inline(always)]
    pub fn is_end_marker(input: &str) -> bool {
        input == "--"
    }

    /// Evaluate if the argument string is a long option (two hyphens and a
    /// name).
    #[inline(always)]
    pub fn is_long_option(input: &str) -> bool {
        input.starts_with("--") && input.len() > 2
    }

    /// Evaluate if the argument string is a short option or a cluster.
    #[inline(always)]
    pub fn is_short_option(input: &str) -> bool {
        input.len() >= 2
            && input.starts_with('-')
            && !input.starts_with("--")
            && !Self::is_negative_number(input)
    }

    /// Evaluate if the argument string reads as a negative number. A hyphen
    /// followed by a decimal digit is a value, never an option.
    #[inline(always)]
    pub fn is_negative_number(input: &str) -> bool {
        let bytes = input.as_bytes();
        bytes.len() >= 2 && bytes[0] == b'-' && bytes[1].is_ascii_digit()
    }
}

/// Expansion state of a short-option cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClusterState<'a> {
    /// No cluster is being expanded.
    Idle,

    /// Mid-cluster; holds the not-yet-emitted characters of the current
    /// argument. Never holds an empty tail.
    Expanding { rest: &'a str },
}

/// Defines a `Tokenizer` that is responsible for streaming classified tokens
/// from the command line input.
///
/// The tokenizer acts like a forward iterator with peek and rewind support.
/// It borrows the argument list and allocates nothing; a single argument may
/// expand into several tokens (clusters, `name=value` forms) across several
/// pulls.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    argv: &'a [&'a str],
    cursor: usize,
    pending_value: Option<&'a str>,
    pending_option: Option<&'a str>,
    seen_end_marker: bool,
    cluster: ClusterState<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a new tokenizer from the command line input.
    pub fn new(argv: &'a [&'a str]) -> Self {
        Tokenizer {
            argv,
            cursor: 0,
            pending_value: None,
            pending_option: None,
            seen_end_marker: false,
            cluster: ClusterState::Idle,
        }
    }

    /// Return the next token without consuming it.
    ///
    /// Any number of consecutive peeks observe the same token and leave the
    /// stream untouched, cluster expansion included.
    pub fn peek(&mut self) -> Option<Token<'a>> {
        let saved = self.clone();
        let token = self.next();
        *self = saved;
        token
    }

    /// Name of the option whose value is queued for the next pull, if any.
    ///
    /// Set while a `name=value` split or a cluster attach is in flight, i.e.
    /// exactly when the next token will be an `OptionValue`.
    #[inline(always)]
    pub fn pending_option(&self) -> Option<&'a str> {
        self.pending_option
    }

    /// Rewind to the start of the stream.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.pending_value = None;
        self.pending_option = None;
        self.seen_end_marker = false;
        self.cluster = ClusterState::Idle;
    }

    /// Emit the next pending character of the cluster under expansion.
    fn cluster_step(&mut self, rest: &'a str) -> Option<Token<'a>> {
        let first = rest.chars().next()?;
        let (name, tail) = rest.split_at(first.len_utf8());

        if tail.is_empty() {
            // Cluster drained: move past the argument and check whether the
            // following one reads as the value of the option just emitted.
            self.cluster = ClusterState::Idle;
            self.cursor += 1;
            self.attach_value(name);
        } else {
            self.cluster = ClusterState::Expanding { rest: tail };
        }

        Some(Token::new(TokenKind::ShortOption, name))
    }

    /// Queue the upcoming argument as the value of `name` when it would
    /// otherwise be a plain positional. The argument is not consumed here;
    /// the queued value is flushed by the next pull.
    fn attach_value(&mut self, name: &'a str) {
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::PositionalArg {
                self.pending_option = Some(name);
                self.pending_value = Some(token.text);
            }
        }
    }

    /// Classify a long option, splitting `name=value` forms over two pulls.
    fn long_option(&mut self, suffix: &'a str) -> Token<'a> {
        if let Some((name, value)) = suffix.split_once('=') {
            // Deferred split: the name goes out now, the cursor stays on
            // this argument, and the next pull flushes the value.
            self.pending_option = Some(name);
            self.pending_value = Some(value);
            return Token::new(TokenKind::LongOption, name);
        }

        self.cursor += 1;
        Token::new(TokenKind::LongOption, suffix)
    }

    /// Classify a short option: a lone flag, a `x=value` split, an opaque
    /// remainder, or the head of a cluster.
    fn short_option(&mut self, rest: &'a str) -> Option<Token<'a>> {
        let first = rest.chars().next()?;
        let (head, tail) = rest.split_at(first.len_utf8());

        if tail.is_empty() {
            self.cursor += 1;
            return Some(Token::new(TokenKind::ShortOption, head));
        }

        if let Some((name, value)) = rest.split_once('=') {
            if name == head {
                // Same deferred split as long options.
                self.pending_option = Some(name);
                self.pending_value = Some(value);
                return Some(Token::new(TokenKind::ShortOption, name));
            }

            // A multi-character name in front of `=` is non-standard; keep
            // the whole remainder as one opaque token.
            self.cursor += 1;
            return Some(Token::new(TokenKind::ShortOption, rest));
        }

        // A cluster: the head goes out now, the tail is expanded by the
        // following pulls.
        self.cluster = ClusterState::Expanding { rest: tail };
        Some(Token::new(TokenKind::ShortOption, head))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Mid-cluster expansion.
        if let ClusterState::Expanding { rest } = self.cluster {
            return self.cluster_step(rest);
        }

        if self.cursor >= self.argv.len() {
            return None;
        }

        // Queued value from a deferred split or a cluster attach. Flushing
        // consumes the argument slot the value came from.
        if let Some(value) = self.pending_value.take() {
            self.pending_option = None;
            self.cursor += 1;
            return Some(Token::new(TokenKind::OptionValue, value));
        }

        let arg = self.argv[self.cursor];

        // Everything after `--` is positional, hyphens or not.
        if self.seen_end_marker {
            self.cursor += 1;
            return Some(Token::new(TokenKind::PositionalArg, arg));
        }

        if Token::is_end_marker(arg) {
            self.seen_end_marker = true;
            self.cursor += 1;
            return Some(Token::new(TokenKind::EndOfOptions, arg));
        }

        // Long option.
        if Token::is_long_option(arg) {
            let (_, suffix) = arg.split_at(2);
            return Some(self.long_option(suffix));
        }

        // Short option or cluster.
        if Token::is_short_option(arg) {
            let (_, rest) = arg.split_at(1);
            return self.short_option(rest);
        }

        // The first argument is the command, whatever it looks like; later
        // ones are positional.
        let kind = if self.cursor == 0 && !self.seen_end_marker {
            TokenKind::Command
        } else {
            TokenKind::PositionalArg
        };

        self.cursor += 1;
        Some(Token::new(kind, arg))
    }
}
