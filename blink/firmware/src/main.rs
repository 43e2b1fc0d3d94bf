//! 50 Hz blink on PB4. 10 ms low, 10 ms high.

#![no_std]
#![no_main]

use avr_device::attiny13a::Peripherals;
use tiny13_fw::{
    InitCtx, Periph, blink, delay::Delay, fuse::FUSE_BYTES, reset_system, unwrap_option,
};

#[cfg(feature = "watchdog")]
use tiny13_fw::wdt::{wdt_init, wdt_poke};

#[unsafe(link_section = ".fuse")]
#[used]
static FUSES: [u8; 2] = FUSE_BYTES;

#[avr_device::entry]
fn main() -> ! {
    // SAFETY: Interrupts are disabled after reset.
    //         This is the only InitCtx.
    let c = unsafe { InitCtx::new() };

    // There are no interrupt handlers. main() is the only register user.
    let io = Periph::new(unwrap_option(Peripherals::take()));

    #[cfg(feature = "watchdog")]
    wdt_init(&io, &c);

    blink::init(&io, &c);

    let m = c.into_main();
    let mut delay = Delay::new();

    loop {
        // The watchdog is poked once per blink phase.
        blink::run(&io, &m, &mut delay, |_m| {
            #[cfg(feature = "watchdog")]
            wdt_poke(_m);
        });
    }
}

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    reset_system();
}

// vim: ts=4 sw=4 expandtab
