pub mod button;
pub mod clock;
pub mod console;
pub mod queue;

pub use button::ButtonLatch;
pub use clock::TickClock;
pub use console::Console;
pub use console::ConsoleWriter;
pub use queue::ByteQueue;
