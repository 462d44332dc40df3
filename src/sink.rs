//! Line-oriented output shared by the chain and the subject.

/// Destination for rendered lines.
pub trait Sink {
    fn emit(&mut self, line: &str);
}

/// Prints each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Sink for Stdout {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Records lines in memory.
impl Sink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_twice<S: Sink>(mut sink: S) {
        sink.emit("first");
        sink.emit("second");
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut lines: Vec<String> = Vec::new();
        emit_twice(&mut lines);
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_boxed_sink_forwards() {
        let mut boxed: Box<Vec<String>> = Box::default();
        boxed.emit("line");
        assert_eq!(*boxed, vec!["line"]);
    }
}
