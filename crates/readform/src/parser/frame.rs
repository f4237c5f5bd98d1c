use alloc::vec::Vec;

/// Sub-state of a string literal frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringState {
    Base,
    Escape,
    /// Reserved; nothing transitions here.
    #[allow(dead_code)]
    EscapeUnicode,
    /// Reserved; nothing transitions here.
    #[allow(dead_code)]
    EscapeHex,
}

/// Stack entry, one per construct being read. `A` is the factory's array
/// type.
#[derive(Debug)]
pub(crate) enum Frame<A> {
    /// Bottom of the stack. Never produces a value itself.
    Root,
    Form {
        end_delimiter: u8,
        elements: A,
    },
    String {
        buffer: Vec<u8>,
        state: StringState,
    },
    Token {
        buffer: Vec<u8>,
    },
}

/// Payload-free copy of a frame's variant, used to dispatch without holding
/// a borrow of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameKind {
    Root,
    Form(u8),
    String,
    Token,
}

impl<A> Frame<A> {
    pub(crate) fn kind(&self) -> FrameKind {
        match self {
            Frame::Root => FrameKind::Root,
            Frame::Form { end_delimiter, .. } => FrameKind::Form(*end_delimiter),
            Frame::String { .. } => FrameKind::String,
            Frame::Token { .. } => FrameKind::Token,
        }
    }
}

/// Closing delimiter for an opening one.
pub(crate) fn end_delimiter_for(open: u8) -> u8 {
    match open {
        b'[' => b']',
        b'{' => b'}',
        _ => b')',
    }
}

#[derive(Debug)]
pub(crate) struct FrameStack<A> {
    stack: Vec<Frame<A>>,
}

impl<A> FrameStack<A> {
    /// A stack holding only [`Frame::Root`].
    pub(crate) fn new(capacity: usize) -> Self {
        let mut frames = Self {
            stack: Vec::with_capacity(capacity),
        };
        frames.push(Frame::Root);
        frames
    }

    pub(crate) fn len(&self) -> usize {
        self.stack.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.stack.capacity()
    }

    pub(crate) fn last(&self) -> Option<&Frame<A>> {
        self.stack.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Frame<A>> {
        self.stack.last_mut()
    }

    pub(crate) fn last_kind(&self) -> Option<FrameKind> {
        self.last().map(Frame::kind)
    }

    /// Pushes `frame`, doubling the backing storage when it is full.
    pub(crate) fn push(&mut self, frame: Frame<A>) {
        if self.stack.len() == self.stack.capacity() {
            self.stack.reserve_exact(self.stack.capacity().max(1));
        }
        self.stack.push(frame);
    }

    pub(crate) fn pop(&mut self) -> Option<Frame<A>> {
        self.stack.pop()
    }

    /// Drops every frame and leaves a single [`Frame::Root`], keeping the
    /// allocation.
    pub(crate) fn reset(&mut self) {
        self.stack.clear();
        self.push(Frame::Root);
    }
}
