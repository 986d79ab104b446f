use crate::payload::LogLine;

/// Lambda writes this line last for every invocation.
pub const REPORT_SENTINEL: &str = "REPORT RequestId:";

/// Log lines of a single function invocation, up to and including its REPORT line.
#[derive(Debug, Default, PartialEq)]
pub struct Chunk<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Chunk<'a> {
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Lines joined by newlines, or `None` when there is nothing but whitespace.
    pub fn message(&self) -> Option<String> {
        let message = self.lines.join("\n");
        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}

/// Groups log lines by invocation. Lines after the last REPORT line are
/// not returned.
pub fn split_invocations(lines: &[LogLine]) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut current = Chunk::default();

    for line in lines {
        let message = line.message.as_deref().unwrap_or_default();
        current.lines.push(message);

        if message.contains(REPORT_SENTINEL) {
            chunks.push(std::mem::take(&mut current));
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(messages: &[&str]) -> Vec<LogLine> {
        messages
            .iter()
            .map(|msg| LogLine {
                id: None,
                timestamp: 1,
                message: Some(msg.to_string()),
            })
            .collect()
    }

    #[test]
    fn test_single_invocation() {
        let lines = lines(&["START", "hello", "REPORT RequestId: abc", "world"]);
        let chunks = split_invocations(&lines);

        assert_eq!(chunks.len(), 1);
        assert_eq!(
            chunks[0].message().as_deref(),
            Some("START\nhello\nREPORT RequestId: abc")
        );
    }

    #[test]
    fn test_chunk_per_report_line() {
        let lines = lines(&[
            "START RequestId: 1 Version: $LATEST\n",
            "2017-04-26T10:41:09.023Z\t1\tloading index.html...\n",
            "END RequestId: 1\n",
            "REPORT RequestId: 1\tDuration: 1095.52 ms\tBilled Duration: 1100 ms \tMemory Size: 128 MB\tMax Memory Used: 32 MB\t\n",
            "START RequestId: 2 Version: $LATEST\n",
            "END RequestId: 2\n",
            "REPORT RequestId: 2\tDuration: 2.01 ms\t\n",
            "START RequestId: 3 Version: $LATEST\n",
            "2017-04-26T10:41:10.023Z\t3\tstill running\n",
        ]);
        let chunks = split_invocations(&lines);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].lines().len(), 4);
        assert_eq!(chunks[1].lines().len(), 3);
        assert!(chunks
            .iter()
            .flat_map(|c| c.lines())
            .all(|line| !line.contains("RequestId: 3")));
    }

    #[test]
    fn test_sentinel_anywhere_in_line() {
        let lines = lines(&["prefix REPORT RequestId: x", "REPORT RequestId:", "report requestid:"]);
        let chunks = split_invocations(&lines);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].lines(), &["prefix REPORT RequestId: x"]);
        assert_eq!(chunks[1].lines(), &["REPORT RequestId:"]);
    }

    #[test]
    fn test_no_sentinel() {
        assert!(split_invocations(&lines(&["START", "hello"])).is_empty());
        assert!(split_invocations(&[]).is_empty());
    }

    #[test]
    fn test_blank_message() {
        let chunk = Chunk {
            lines: vec![" ", "\t", ""],
        };
        assert_eq!(chunk.message(), None);
        assert_eq!(Chunk::default().message(), None);

        let chunk = Chunk {
            lines: vec![" ", "x"],
        };
        assert_eq!(chunk.message().as_deref(), Some(" \nx"));
    }

    #[test]
    fn test_missing_message() {
        let mut lines = lines(&["REPORT RequestId: abc"]);
        lines.insert(
            0,
            LogLine {
                id: None,
                timestamp: 1,
                message: None,
            },
        );
        let chunks = split_invocations(&lines);

        assert_eq!(chunks.len(), 1);
        assert_eq!(
            chunks[0].message().as_deref(),
            Some("\nREPORT RequestId: abc")
        );
    }
}
