//! Interactive console front-end for the employee directory.
//!
//! # Responsibility
//! - Drive the numbered menu loop over stdin/stdout.
//! - Render operation results and advisory errors as text lines.
//!
//! # Invariants
//! - Core state is owned by `DirectoryService`; this layer never mutates it
//!   directly.
//! - Every advisory error is printed and the loop continues; only menu
//!   option 11 (or end of input) terminates the process, with exit status 0.

mod input;

use input::{prompt_f64, prompt_line, prompt_u32, read_line};
use log::info;
use staffbook_core::{
    default_log_level, init_logging, DirectoryService, Employee, MemoryEmployeeRepository,
};
use std::io::{self, BufRead, Write};

const MENU: &str = "\nMenu:
1. Register
2. Sign In
3. Sign Out
4. Add Employee
5. View All Employees
6. Update Employee
7. Remove Employee
8. Search Employee by Name
9. Display Employees by Department
10. Calculate Total Salary Expenditure
11. Exit";

fn main() -> io::Result<()> {
    init_diagnostics();

    let mut service = DirectoryService::new(MemoryEmployeeRepository::new());
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut stdin.lock(), &mut stdout.lock(), &mut service)
}

/// Best-effort logging bootstrap. A failure here must not block the tool.
fn init_diagnostics() {
    let log_dir = std::env::temp_dir().join(format!("staffbook-{}", std::process::id()));
    match log_dir.to_str() {
        Some(dir) => {
            if let Err(err) = init_logging(default_log_level(), dir) {
                eprintln!("warning: logging disabled: {err}");
            } else {
                info!(
                    "event=cli_start module=cli status=ok core_version={}",
                    staffbook_core::core_version()
                );
            }
        }
        None => eprintln!("warning: logging disabled: log directory is not valid UTF-8"),
    }
}

/// Menu loop. Generic over reader/writer so sessions can be scripted in
/// tests without touching the real console.
fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    service: &mut DirectoryService<MemoryEmployeeRepository>,
) -> io::Result<()> {
    writeln!(
        output,
        "Welcome to the Professional Employee Management System!"
    )?;

    'menu: loop {
        writeln!(output, "{MENU}")?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;

        let choice = match read_line(input)? {
            Some(line) => line,
            None => break 'menu,
        };

        macro_rules! ask {
            ($helper:ident, $prompt:expr) => {
                match $helper(input, output, $prompt)? {
                    Some(value) => value,
                    None => break 'menu,
                }
            };
        }

        match choice.trim() {
            "1" => {
                let username = ask!(prompt_line, "Enter username to register: ");
                match service.register(&username) {
                    Ok(()) => writeln!(output, "User registered successfully: {username}")?,
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            "2" => {
                let username = ask!(prompt_line, "Enter username to sign in: ");
                match service.sign_in(&username) {
                    Ok(()) => writeln!(output, "User signed in successfully: {username}")?,
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            "3" => match service.sign_out() {
                Ok(username) => writeln!(output, "User signed out successfully: {username}")?,
                Err(err) => writeln!(output, "{err}")?,
            },
            "4" => {
                let name = ask!(prompt_line, "Enter Name: ");
                let department = ask!(prompt_line, "Enter Department: ");
                let salary = ask!(prompt_f64, "Enter Salary: ");
                match service.add_employee(&name, &department, salary) {
                    Ok(employee) => {
                        writeln!(output, "Employee added successfully:")?;
                        writeln!(output, "{employee}")?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            "5" => match service.list_employees() {
                Ok(employees) if employees.is_empty() => {
                    writeln!(output, "No employees found.")?;
                }
                Ok(employees) => {
                    writeln!(output, "Employee List:")?;
                    render_records(output, employees)?;
                }
                Err(err) => writeln!(output, "{err}")?,
            },
            "6" => {
                let id = ask!(prompt_u32, "Enter Employee ID to update: ");
                let name = ask!(prompt_line, "Enter New Name: ");
                let department = ask!(prompt_line, "Enter New Department: ");
                let salary = ask!(prompt_f64, "Enter New Salary: ");
                match service.update_employee(id, &name, &department, salary) {
                    Ok(employee) => {
                        writeln!(output, "Employee updated successfully:")?;
                        writeln!(output, "{employee}")?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            "7" => {
                let id = ask!(prompt_u32, "Enter Employee ID to remove: ");
                match service.remove_employee(id) {
                    Ok(employee) => {
                        writeln!(output, "Employee removed successfully: {employee}")?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            "8" => {
                let name = ask!(prompt_line, "Enter Employee Name to search: ");
                match service.search_by_name(&name) {
                    Ok(matches) if matches.is_empty() => {
                        writeln!(output, "No employees found with the name: {name}")?;
                    }
                    Ok(matches) => {
                        writeln!(output, "Search Results:")?;
                        render_records(output, &matches)?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            "9" => {
                let department = ask!(prompt_line, "Enter Department to display employees: ");
                match service.filter_by_department(&department) {
                    Ok(matches) if matches.is_empty() => {
                        writeln!(
                            output,
                            "No employees found in the department: {department}"
                        )?;
                    }
                    Ok(matches) => {
                        writeln!(output, "Employees in {department} Department:")?;
                        render_records(output, &matches)?;
                    }
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            "10" => match service.total_salary() {
                Ok(total) => writeln!(output, "Total salary expenditure: ${total:.2}")?,
                Err(err) => writeln!(output, "{err}")?,
            },
            "11" => break 'menu,
            _ => writeln!(output, "Invalid choice. Please try again.")?,
        }
    }

    writeln!(
        output,
        "Thank you for using the Employee Management System. Goodbye!"
    )?;
    Ok(())
}

fn render_records<W: Write>(output: &mut W, employees: &[Employee]) -> io::Result<()> {
    for employee in employees {
        writeln!(output, "{employee}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use staffbook_core::{DirectoryService, MemoryEmployeeRepository};
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let mut service = DirectoryService::new(MemoryEmployeeRepository::new());
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&mut input, &mut output, &mut service).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn full_session_adds_records_and_totals_salaries() {
        let output = run_script(
            "1\nalice\n2\nalice\n\
             4\nAlice\nEng\n1000\n\
             4\nBob\nSales\n2000\n\
             10\n11\n",
        );
        assert!(output.contains("User registered successfully: alice"));
        assert!(output.contains("User signed in successfully: alice"));
        assert!(output.contains("Employee ID: 1, Name: Alice, Department: Eng, Salary: $1000.00"));
        assert!(output.contains("Employee ID: 2, Name: Bob, Department: Sales, Salary: $2000.00"));
        assert!(output.contains("Total salary expenditure: $3000.00"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn record_operations_are_denied_while_signed_out() {
        let output = run_script("4\nBob\nSales\n2000\n5\n11\n");
        assert!(output.contains("Please sign in to perform this action."));
        assert!(!output.contains("Employee added successfully"));
    }

    #[test]
    fn malformed_salary_reprompts_until_valid() {
        let output = run_script(
            "1\nalice\n2\nalice\n\
             4\nAlice\nEng\nlots\n1e3\n\
             10\n11\n",
        );
        assert!(output.contains("Invalid input. Please enter a valid number: "));
        assert!(output.contains("Total salary expenditure: $1000.00"));
    }

    #[test]
    fn unknown_menu_choice_reports_and_continues() {
        let output = run_script("12\n11\n");
        assert!(output.contains("Invalid choice. Please try again."));
        // Menu shown again after the bad choice.
        assert_eq!(output.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn closed_input_ends_the_session_cleanly() {
        let output = run_script("");
        assert!(output.contains("Welcome to the Professional Employee Management System!"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn remove_then_update_reports_not_found() {
        let output = run_script(
            "1\nalice\n2\nalice\n\
             4\nAlice\nEng\n1000\n\
             7\n1\n\
             6\n1\nAlia\nEng\n1200\n\
             11\n",
        );
        assert!(output
            .contains("Employee removed successfully: Employee ID: 1, Name: Alice"));
        assert!(output.contains("Employee with ID 1 not found."));
    }
}
