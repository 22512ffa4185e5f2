// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Line-oriented command shell for the angle gauge.
//!
//! The operator types commands over the serial link; the shell tokenizes each
//! completed line, matches the first token against a fixed table
//! (case-insensitive), and runs the handler. All feedback goes through the
//! shell's text output; handlers return nothing and validation failures leave
//! the indicator and calibration state untouched.
//!
//! `calibrate` and `set` run polling loops on the foreground task. `calibrate`
//! waits for the operator's button press, bounded only by the operator.
//! `set` re-samples the sensor until the measured offset equals the target
//! exactly; there is no timeout or cancellation path, so a sensor that never
//! reports the target leaves the loop spinning.

pub mod line;

pub use line::LineBuffer;

use core::fmt::Write;
use core::hint::spin_loop;

use crate::control::tracking;
use crate::control::Calibration;
use crate::drivers::indicator::{colors, Indicator};
use crate::drivers::sensor::TiltSensor;
use crate::hw::button::ButtonLatch;
use crate::hw::console::Console;

const MAX_TOKENS: usize = 10;

#[derive(Copy, Clone)]
enum Action {
    Author,
    Calibrate,
    Help,
    Info,
    Set,
}

struct CommandEntry {
    name: &'static str,
    help: &'static str,
    action: Action,
}

static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "author",
        help: "author          - print the author of this firmware",
        action: Action::Author,
    },
    CommandEntry {
        name: "calibrate",
        help: "calibrate       - set the current position as the zero reference (press the button to confirm)",
        action: Action::Calibrate,
    },
    CommandEntry {
        name: "help",
        help: "help            - print this list of commands",
        action: Action::Help,
    },
    CommandEntry {
        name: "info",
        help: "info            - print the current absolute roll angle",
        action: Action::Info,
    },
    CommandEntry {
        name: "set",
        help: "set <angle>     - track toward <angle> degrees measured from the zero reference",
        action: Action::Set,
    },
];

/// Command dispatcher owning the calibration state and the device-facing
/// collaborators.
pub struct Shell<'a, S, I, W> {
    sensor: S,
    indicator: I,
    button: &'a ButtonLatch,
    out: W,
    calibration: Calibration,
}

impl<'a, S, I, W> Shell<'a, S, I, W>
where
    S: TiltSensor,
    I: Indicator,
    W: Write,
{
    pub fn new(sensor: S, indicator: I, button: &'a ButtonLatch, out: W) -> Self {
        Self {
            sensor,
            indicator,
            button,
            out,
            calibration: Calibration::new(),
        }
    }

    /// Current calibration state.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Tokenize one completed input line and run the matching command.
    ///
    /// A blank line is ignored; an unrecognized first token is reported and
    /// nothing else happens.
    pub fn dispatch(&mut self, input: &str) {
        let mut argv = [""; MAX_TOKENS];
        let mut argc = 0;
        for token in input.split_ascii_whitespace() {
            if argc == MAX_TOKENS {
                break;
            }
            argv[argc] = token;
            argc += 1;
        }
        if argc == 0 {
            return;
        }

        match COMMANDS
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(argv[0]))
        {
            Some(entry) => match entry.action {
                Action::Author => self.cmd_author(argc),
                Action::Calibrate => self.cmd_calibrate(argc),
                Action::Help => self.cmd_help(argc),
                Action::Info => self.cmd_info(argc),
                Action::Set => self.cmd_set(argc, &argv),
            },
            None => {
                let _ = writeln!(self.out, "Unknown command: {}\r", argv[0]);
            }
        }
    }

    fn usage(&mut self, name: &str) {
        let _ = writeln!(self.out, "Wrong syntax! See help for the {name} usage\r");
    }

    fn drive(&mut self, color: (u8, u8, u8)) {
        self.indicator.drive(color.0, color.1, color.2);
    }

    fn cmd_author(&mut self, argc: usize) {
        if argc != 1 {
            return self.usage("author");
        }
        let _ = writeln!(self.out, "Christopher Liu\r");
    }

    fn cmd_help(&mut self, argc: usize) {
        if argc != 1 {
            return self.usage("help");
        }
        for entry in COMMANDS {
            let _ = writeln!(self.out, "{}\r", entry.help);
        }
    }

    fn cmd_info(&mut self, argc: usize) {
        if argc != 1 {
            return self.usage("info");
        }
        let magnitude = self.sensor.read_roll().abs();
        let _ = writeln!(self.out, "Current roll angle: {magnitude}\r");
    }

    /// Establish the zero reference: wait for the operator to position the
    /// gauge and confirm with the button, then latch the measured magnitude.
    fn cmd_calibrate(&mut self, argc: usize) {
        if argc != 1 {
            return self.usage("calibrate");
        }
        self.drive(colors::WAITING);
        let _ = writeln!(
            self.out,
            "Move the gauge to the zero position and press the button to set it\r"
        );

        self.button.reset();
        while !self.button.poll() {
            spin_loop();
        }

        let reference = self.sensor.read_roll().abs();
        if !self.calibration.establish(reference) {
            let _ = writeln!(
                self.out,
                "The zero reference must be between 0 and 90, type calibrate to try again\r"
            );
            return;
        }
        let _ = writeln!(self.out, "Button pressed, zero reference set to {reference}\r");
        let _ = writeln!(
            self.out,
            "Angles up to {} can be measured from this reference\r",
            self.calibration.maximum_angle()
        );
        self.drive(colors::READY);
    }

    /// Track toward a target angle, blending the indicator with progress.
    fn cmd_set(&mut self, argc: usize, argv: &[&str]) {
        if argc != 2 {
            return self.usage("set");
        }
        let target = match parse_angle(argv[1]) {
            Some(value) => value,
            None => {
                let _ = writeln!(self.out, "Enter a valid angle from 0 - 180\r");
                return;
            }
        };
        if target > self.calibration.maximum_angle() {
            let _ = writeln!(
                self.out,
                "The maximum angle that can be measured is {}\r",
                self.calibration.maximum_angle()
            );
            return;
        }

        let _ = writeln!(self.out, "Input angle {target}, move the gauge toward it\r");
        self.drive(colors::SEEKING);

        // Convergence loop: re-sample every iteration until the offset from
        // the reference equals the target exactly. No timeout.
        loop {
            let magnitude = self.sensor.read_roll().abs();
            let measured = magnitude - self.calibration.reference();
            if measured == target {
                self.drive(colors::ARRIVED);
                break;
            }
            let (r, g, b) =
                tracking::seeking_levels(magnitude, self.calibration.reference(), measured, target);
            self.indicator.drive(r, g, b);
        }

        let _ = writeln!(self.out, "Desired angle reached\r");
        self.calibration.clear_reference();
        let _ = writeln!(
            self.out,
            "Type calibrate to set a zero reference before measuring another angle\r"
        );
    }
}

/// Parse a non-negative base-10 angle in 0..=180. Anything else, including
/// signs, blanks, and non-digit characters, is rejected.
fn parse_angle(arg: &str) -> Option<i32> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i32 = arg.parse().ok()?;
    (0..=180).contains(&value).then_some(value)
}

/// Foreground dispatch loop: pull bytes off the console, accumulate lines,
/// and hand each completed line to the shell. Never returns.
pub fn run<const N: usize, S, I>(
    console: &Console<N>,
    sensor: S,
    indicator: I,
    button: &ButtonLatch,
) -> !
where
    S: TiltSensor,
    I: Indicator,
{
    let mut shell = Shell::new(sensor, indicator, button, console.writer());
    let mut line = LineBuffer::<128>::new();
    let mut echo = console.writer();
    loop {
        let byte = console.getchar();
        if line.push(byte, &mut echo) {
            shell.dispatch(line.line());
            line.clear();
        }
    }
}
