//! Session loop.

use std::io::{self, BufRead, Write};

use super::menu::MenuAction;
use crate::heap::PriorityHeap;
use crate::loader::{Loader, ParseError};
use crate::shipment::ShipmentRecord;

/// Failure that ends a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Whether the session keeps prompting after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive front end over a shipment heap.
///
/// # Examples
///
/// ```
/// use u_dispatch::heap::PriorityHeap;
/// use u_dispatch::loader::Loader;
/// use u_dispatch::session::Session;
///
/// let input = "2\n1\n9\n3\n5\nvaccines\n3\n6\n";
/// let mut output = Vec::new();
/// let mut session = Session::new(PriorityHeap::new(), Loader::default(), input.as_bytes(), &mut output);
/// session.run().unwrap();
///
/// assert_eq!(session.heap().size(), 1);
/// drop(session);
/// assert!(String::from_utf8(output).unwrap().contains("#1 priority=85"));
/// ```
pub struct Session<R, W> {
    heap: PriorityHeap<ShipmentRecord>,
    loader: Loader,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(heap: PriorityHeap<ShipmentRecord>, loader: Loader, input: R, output: W) -> Self {
        Self {
            heap,
            loader,
            input,
            output,
        }
    }

    pub fn heap(&self) -> &PriorityHeap<ShipmentRecord> {
        &self.heap
    }

    pub fn into_heap(self) -> PriorityHeap<ShipmentRecord> {
        self.heap
    }

    /// Shows the menu and executes selections until exit or end of input.
    pub fn run(&mut self) -> Result<(), SessionError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choice: ")? else {
                log::debug!("input closed, ending session");
                return Ok(());
            };

            match choice.parse::<MenuAction>() {
                Ok(action) => {
                    if self.execute(action)? == Flow::Exit {
                        return Ok(());
                    }
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Runs a single action.
    pub fn execute(&mut self, action: MenuAction) -> Result<Flow, SessionError> {
        log::debug!("executing {action:?}");
        match action {
            MenuAction::LoadFile => self.load_file(),
            MenuAction::InsertOne => self.insert_one(),
            MenuAction::ShowTop => {
                match self.heap.peek() {
                    Some(record) => writeln!(self.output, "Most urgent: {record}")?,
                    None => writeln!(self.output, "No shipments pending.")?,
                }
                Ok(Flow::Continue)
            }
            MenuAction::RemoveTop => {
                match self.heap.extract_max() {
                    Some(record) => writeln!(self.output, "Dispatched: {record}")?,
                    None => writeln!(self.output, "No shipments pending.")?,
                }
                Ok(Flow::Continue)
            }
            MenuAction::ShowAllSorted => {
                let sorted = self.heap.snapshot_sorted_descending();
                if sorted.is_empty() {
                    writeln!(self.output, "No shipments pending.")?;
                }
                for (rank, record) in sorted.iter().enumerate() {
                    writeln!(self.output, "{:>4}. {record}", rank + 1)?;
                }
                Ok(Flow::Continue)
            }
            MenuAction::Exit => {
                writeln!(self.output, "Goodbye.")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn load_file(&mut self) -> Result<Flow, SessionError> {
        let Some(path) = self.prompt("CSV file path: ")? else {
            return Ok(Flow::Exit);
        };

        match self.loader.load_path(&path, &mut self.heap) {
            Ok(report) => {
                writeln!(self.output, "Loaded {} shipments.", report.inserted)?;
                for rejected in &report.rejected {
                    writeln!(self.output, "  skipped {rejected}")?;
                }
            }
            Err(err) => writeln!(self.output, "Load failed: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn insert_one(&mut self) -> Result<Flow, SessionError> {
        let mut values = [0i64; 4];
        for (slot, field) in values
            .iter_mut()
            .zip(["id", "category", "urgency", "weight"])
        {
            let Some(answer) = self.prompt(&format!("{field}: "))? else {
                return Ok(Flow::Exit);
            };
            match answer.parse::<i64>() {
                Ok(value) => *slot = value,
                Err(_) => {
                    let err = ParseError::InvalidInteger {
                        field,
                        value: answer,
                    };
                    writeln!(self.output, "Not inserted: {err}")?;
                    return Ok(Flow::Continue);
                }
            }
        }
        let Some(description) = self.prompt("description (optional): ")? else {
            return Ok(Flow::Exit);
        };
        let description = (!description.is_empty()).then_some(description);

        let [id, category, urgency, weight] = values;
        match ShipmentRecord::new(
            id,
            category,
            urgency,
            weight,
            description,
            self.loader.categories(),
        ) {
            Ok(record) => {
                writeln!(self.output, "Inserted: {record}")?;
                self.heap.insert(record);
            }
            Err(err) => writeln!(self.output, "Not inserted: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for action in MenuAction::ALL {
            writeln!(self.output, "{action}")?;
        }
        Ok(())
    }

    /// Writes `label` and reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shipment::CategorySet;

    fn run(input: &str) -> (PriorityHeap<ShipmentRecord>, String) {
        let mut output = Vec::new();
        let mut session = Session::new(
            PriorityHeap::new(),
            Loader::new(CategorySet::default()),
            input.as_bytes(),
            &mut output,
        );
        session.run().unwrap();
        let heap = session.into_heap();
        (heap, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_immediately() {
        let (heap, out) = run("6\n");
        assert!(heap.is_empty());
        assert!(out.contains("1 - Load shipments from CSV file"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (heap, out) = run("");
        assert!(heap.is_empty());
        assert!(!out.contains("Goodbye."));
    }

    #[test]
    fn test_unknown_option_reprompts() {
        let (_, out) = run("9\nabc\n6\n");
        assert!(out.contains("unrecognized option '9'"));
        assert!(out.contains("unrecognized option 'abc'"));
        assert_eq!(out.matches("6 - Exit").count(), 3);
    }

    #[test]
    fn test_insert_show_remove() {
        let input = "2\n1\n9\n3\n5\nvaccines\n2\n2\n5\n3\n5\n\n3\n4\n4\n4\n6\n";
        let (heap, out) = run(input);
        assert!(heap.is_empty());
        assert!(out.contains("Inserted: #1 priority=85"));
        assert!(out.contains("Inserted: #2 priority=65"));
        assert!(out.contains("Most urgent: #1 priority=85"));

        let first = out.find("Dispatched: #1").unwrap();
        let second = out.find("Dispatched: #2").unwrap();
        assert!(first < second);
        assert!(out.contains("No shipments pending."));
    }

    #[test]
    fn test_insert_rejects_invalid_values() {
        let (heap, out) = run("2\n1\n9\n5\n1\n\n6\n");
        assert!(heap.is_empty());
        assert!(out.contains("Not inserted: urgency 5 outside [1, 3]"));
    }

    #[test]
    fn test_insert_rejects_non_integer() {
        let (heap, out) = run("2\n1\nnine\n6\n");
        assert!(heap.is_empty());
        assert!(out.contains("Not inserted: field 'category' is not an integer: 'nine'"));
    }

    #[test]
    fn test_show_all_sorted_keeps_heap() {
        let input = "2\n7\n5\n2\n4\n\n2\n3\n5\n2\n4\n\n2\n1\n9\n3\n5\n\n5\n6\n";
        let (heap, out) = run(input);
        assert_eq!(heap.size(), 3);

        let a = out.find("   1. #1 ").unwrap();
        let b = out.find("   2. #3 ").unwrap();
        let c = out.find("   3. #7 ").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_load_missing_file_reports() {
        let (heap, out) = run("1\n/nonexistent/u-dispatch.csv\n6\n");
        assert!(heap.is_empty());
        assert!(out.contains("Load failed: cannot open /nonexistent/u-dispatch.csv"));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("u-dispatch-session-{}.csv", std::process::id()));
        std::fs::write(&path, "1,9,3,5,a\n2,9,9,5,bad\n").unwrap();

        let input = format!("1\n{}\n3\n6\n", path.display());
        let (heap, out) = run(&input);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(heap.size(), 1);
        assert!(out.contains("Loaded 1 shipments."));
        assert!(out.contains("skipped line 2: urgency 9 outside [1, 3]"));
        assert!(out.contains("Most urgent: #1"));
    }

    #[test]
    fn test_execute_single_action() {
        let mut output = Vec::new();
        let mut session = Session::new(PriorityHeap::new(), Loader::default(), io::empty(), &mut output);
        assert_eq!(session.execute(MenuAction::ShowTop).unwrap(), Flow::Continue);
        assert_eq!(session.execute(MenuAction::Exit).unwrap(), Flow::Exit);
    }
}
