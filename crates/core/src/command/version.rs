use super::{Command, VERSION};
use crate::argument::ArgumentValueList;
use crate::error::Result;
use crate::parameter::ParameterSchema;
use crate::stream::{Stream, StreamName};

/// Writes the application's version.
#[derive(Debug, Clone, Default)]
pub struct VersionCommand {
    version: String,
    schema: ParameterSchema,
}

impl VersionCommand {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            schema: ParameterSchema::new(),
        }
    }
}

impl Command for VersionCommand {
    fn name(&self) -> &str {
        VERSION
    }

    fn description(&self) -> &str {
        "Get the version of the application"
    }

    fn schema(&self) -> &ParameterSchema {
        &self.schema
    }

    fn run(&mut self, _arguments: ArgumentValueList, stream: &mut Stream) -> Result<()> {
        stream.write_line(&self.version, StreamName::Out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::SharedBuffer;
    use std::io;

    #[test]
    fn test_writes_version() {
        let out = SharedBuffer::new();
        let mut stream = Stream::new(io::empty(), out.clone(), io::sink());

        let mut command = VersionCommand::new("1.2.3");
        command.run(ArgumentValueList::new(), &mut stream).unwrap();

        assert_eq!(out.contents(), "1.2.3\n");
        assert_eq!(command.usage(true), "Usage: version");
    }
}
