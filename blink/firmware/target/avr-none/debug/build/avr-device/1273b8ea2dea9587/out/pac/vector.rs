#[doc(hidden)]
#[macro_export]
macro_rules! __avr_device_trampoline {
    (@attiny13a, RESET, $it:item) => {
        #[export_name = "__vector_0"]
        $it
    };
    (@attiny13a, INT0, $it:item) => {
        #[export_name = "__vector_1"]
        $it
    };
    (@attiny13a, PCINT0, $it:item) => {
        #[export_name = "__vector_2"]
        $it
    };
    (@attiny13a, TIM0_OVF, $it:item) => {
        #[export_name = "__vector_3"]
        $it
    };
    (@attiny13a, EE_RDY, $it:item) => {
        #[export_name = "__vector_4"]
        $it
    };
    (@attiny13a, ANA_COMP, $it:item) => {
        #[export_name = "__vector_5"]
        $it
    };
    (@attiny13a, TIM0_COMPA, $it:item) => {
        #[export_name = "__vector_6"]
        $it
    };
    (@attiny13a, TIM0_COMPB, $it:item) => {
        #[export_name = "__vector_7"]
        $it
    };
    (@attiny13a, WDT, $it:item) => {
        #[export_name = "__vector_8"]
        $it
    };
    (@attiny13a, ADC, $it:item) => {
        #[export_name = "__vector_9"]
        $it
    };
    (@$mcu:ident, $name:ident, $it:item) => {
        compile_error!(concat!("Couldn't find interrupt ", stringify!($name), ", for MCU ", stringify!($mcu), "."));
    }
}
