///Number available in the NVIC for configuring priority
pub const NVIC_PRIO_BITS: u8 = 4;
#[doc(hidden)]
pub mod interrupt {
    ///Enumeration of all the interrupts.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    #[repr(u16)]
    pub enum Interrupt {
        ///0 - External Reset, Power-on Reset and Watchdog Reset
        RESET = 0,
        ///1 - External Interrupt 0
        INT0 = 1,
        ///2 - External Interrupt Request 0
        PCINT0 = 2,
        ///3 - Timer/Counter0 Overflow
        TIM0_OVF = 3,
        ///4 - EEPROM Ready
        EE_RDY = 4,
        ///5 - Analog Comparator
        ANA_COMP = 5,
        ///6 - Timer/Counter Compare Match A
        TIM0_COMPA = 6,
        ///7 - Timer/Counter Compare Match B
        TIM0_COMPB = 7,
        ///8 - Watchdog Time-out
        WDT = 8,
        ///9 - ADC Conversion Complete
        ADC = 9,
    }
    /// TryFromInterruptError
    #[derive(Debug, Copy, Clone)]
    pub struct TryFromInterruptError(());
    impl Interrupt {
        /// Attempt to convert a given value into an `Interrupt`
        #[inline]
        pub fn try_from(value: u8) -> Result<Self, TryFromInterruptError> {
            match value {
                0 => Ok(Interrupt::RESET),
                1 => Ok(Interrupt::INT0),
                2 => Ok(Interrupt::PCINT0),
                3 => Ok(Interrupt::TIM0_OVF),
                4 => Ok(Interrupt::EE_RDY),
                5 => Ok(Interrupt::ANA_COMP),
                6 => Ok(Interrupt::TIM0_COMPA),
                7 => Ok(Interrupt::TIM0_COMPB),
                8 => Ok(Interrupt::WDT),
                9 => Ok(Interrupt::ADC),
                _ => Err(TryFromInterruptError(())),
            }
        }
    }
}
pub use self::interrupt::Interrupt;
///Analog Comparator
pub type AC = crate::Periph<ac::RegisterBlock, 0x23>;
impl core::fmt::Debug for AC {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("AC").finish()
    }
}
///Analog Comparator
pub mod ac {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        adcsrb: ADCSRB,
        _reserved1: [u8; 0x04],
        acsr: ACSR,
        _reserved2: [u8; 0x0b],
        didr0: DIDR0,
    }
    impl RegisterBlock {
        ///0x00 - ADC Control and Status Register B
        #[inline(always)]
        pub const fn adcsrb(&self) -> &ADCSRB {
            &self.adcsrb
        }
        ///0x05 - Analog Comparator Control And Status Register
        #[inline(always)]
        pub const fn acsr(&self) -> &ACSR {
            &self.acsr
        }
        ///0x11 - Digital Input Disable Register 0
        #[inline(always)]
        pub const fn didr0(&self) -> &DIDR0 {
            &self.didr0
        }
    }
    /**ACSR (rw) register accessor: Analog Comparator Control And Status Register

You can [`read`](crate::Reg::read) this register and get [`acsr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`acsr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@acsr`] module*/
    pub type ACSR = crate::Reg<acsr::ACSR_SPEC>;
    ///Analog Comparator Control And Status Register
    pub mod acsr {
        ///Register `ACSR` reader
        pub type R = crate::R<ACSR_SPEC>;
        ///Register `ACSR` writer
        pub type W = crate::W<ACSR_SPEC>;
        /**Analog Comparator Interrupt Mode Select

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum ACIS_A {
            ///0: Interrupt on Toggle
            ON_TOGGLE = 0,
            ///2: Interrupt on Falling Edge
            ON_FALLING_EDGE = 2,
            ///3: Interrupt on Rising Edge
            ON_RISING_EDGE = 3,
        }
        impl From<ACIS_A> for u8 {
            #[inline(always)]
            fn from(variant: ACIS_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for ACIS_A {
            type Ux = u8;
        }
        impl crate::IsEnum for ACIS_A {}
        ///Field `ACIS` reader - Analog Comparator Interrupt Mode Select
        pub type ACIS_R = crate::FieldReader<ACIS_A>;
        impl ACIS_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> Option<ACIS_A> {
                match self.bits {
                    0 => Some(ACIS_A::ON_TOGGLE),
                    2 => Some(ACIS_A::ON_FALLING_EDGE),
                    3 => Some(ACIS_A::ON_RISING_EDGE),
                    _ => None,
                }
            }
            ///Interrupt on Toggle
            #[inline(always)]
            pub fn is_on_toggle(&self) -> bool {
                *self == ACIS_A::ON_TOGGLE
            }
            ///Interrupt on Falling Edge
            #[inline(always)]
            pub fn is_on_falling_edge(&self) -> bool {
                *self == ACIS_A::ON_FALLING_EDGE
            }
            ///Interrupt on Rising Edge
            #[inline(always)]
            pub fn is_on_rising_edge(&self) -> bool {
                *self == ACIS_A::ON_RISING_EDGE
            }
        }
        ///Field `ACIS` writer - Analog Comparator Interrupt Mode Select
        pub type ACIS_W<'a, REG> = crate::FieldWriter<'a, REG, 2, ACIS_A>;
        impl<'a, REG> ACIS_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Interrupt on Toggle
            #[inline(always)]
            pub fn on_toggle(self) -> &'a mut crate::W<REG> {
                self.variant(ACIS_A::ON_TOGGLE)
            }
            ///Interrupt on Falling Edge
            #[inline(always)]
            pub fn on_falling_edge(self) -> &'a mut crate::W<REG> {
                self.variant(ACIS_A::ON_FALLING_EDGE)
            }
            ///Interrupt on Rising Edge
            #[inline(always)]
            pub fn on_rising_edge(self) -> &'a mut crate::W<REG> {
                self.variant(ACIS_A::ON_RISING_EDGE)
            }
        }
        ///Field `ACIE` reader - Analog Comparator Interrupt Enable
        pub type ACIE_R = crate::BitReader;
        ///Field `ACIE` writer - Analog Comparator Interrupt Enable
        pub type ACIE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ACI` reader - Analog Comparator Interrupt Flag
        pub type ACI_R = crate::BitReader;
        ///Field `ACI` writer - Analog Comparator Interrupt Flag
        pub type ACI_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ACO` reader - Analog Compare Output
        pub type ACO_R = crate::BitReader;
        ///Field `ACBG` reader - Analog Comparator Bandgap Select
        pub type ACBG_R = crate::BitReader;
        ///Field `ACBG` writer - Analog Comparator Bandgap Select
        pub type ACBG_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ACD` reader - Analog Comparator Disable
        pub type ACD_R = crate::BitReader;
        ///Field `ACD` writer - Analog Comparator Disable
        pub type ACD_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bits 0:1 - Analog Comparator Interrupt Mode Select
            #[inline(always)]
            pub fn acis(&self) -> ACIS_R {
                ACIS_R::new(self.bits & 3)
            }
            ///Bit 3 - Analog Comparator Interrupt Enable
            #[inline(always)]
            pub fn acie(&self) -> ACIE_R {
                ACIE_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - Analog Comparator Interrupt Flag
            #[inline(always)]
            pub fn aci(&self) -> ACI_R {
                ACI_R::new(((self.bits >> 4) & 1) != 0)
            }
            ///Bit 5 - Analog Compare Output
            #[inline(always)]
            pub fn aco(&self) -> ACO_R {
                ACO_R::new(((self.bits >> 5) & 1) != 0)
            }
            ///Bit 6 - Analog Comparator Bandgap Select
            #[inline(always)]
            pub fn acbg(&self) -> ACBG_R {
                ACBG_R::new(((self.bits >> 6) & 1) != 0)
            }
            ///Bit 7 - Analog Comparator Disable
            #[inline(always)]
            pub fn acd(&self) -> ACD_R {
                ACD_R::new(((self.bits >> 7) & 1) != 0)
            }
        }
        impl W {
            ///Bits 0:1 - Analog Comparator Interrupt Mode Select
            #[inline(always)]
            pub fn acis(&mut self) -> ACIS_W<'_, ACSR_SPEC> {
                ACIS_W::new(self, 0)
            }
            ///Bit 3 - Analog Comparator Interrupt Enable
            #[inline(always)]
            pub fn acie(&mut self) -> ACIE_W<'_, ACSR_SPEC> {
                ACIE_W::new(self, 3)
            }
            ///Bit 4 - Analog Comparator Interrupt Flag
            #[inline(always)]
            pub fn aci(&mut self) -> ACI_W<'_, ACSR_SPEC> {
                ACI_W::new(self, 4)
            }
            ///Bit 6 - Analog Comparator Bandgap Select
            #[inline(always)]
            pub fn acbg(&mut self) -> ACBG_W<'_, ACSR_SPEC> {
                ACBG_W::new(self, 6)
            }
            ///Bit 7 - Analog Comparator Disable
            #[inline(always)]
            pub fn acd(&mut self) -> ACD_W<'_, ACSR_SPEC> {
                ACD_W::new(self, 7)
            }
        }
        /**Analog Comparator Control And Status Register

You can [`read`](crate::Reg::read) this register and get [`acsr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`acsr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct ACSR_SPEC;
        impl crate::RegisterSpec for ACSR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`acsr::R`](R) reader structure
        impl crate::Readable for ACSR_SPEC {}
        ///`write(|w| ..)` method takes [`acsr::W`](W) writer structure
        impl crate::Writable for ACSR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets ACSR to value 0
        impl crate::Resettable for ACSR_SPEC {}
    }
    /**ADCSRB (rw) register accessor: ADC Control and Status Register B

You can [`read`](crate::Reg::read) this register and get [`adcsrb::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`adcsrb::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@adcsrb`] module*/
    pub type ADCSRB = crate::Reg<adcsrb::ADCSRB_SPEC>;
    ///ADC Control and Status Register B
    pub mod adcsrb {
        ///Register `ADCSRB` reader
        pub type R = crate::R<ADCSRB_SPEC>;
        ///Register `ADCSRB` writer
        pub type W = crate::W<ADCSRB_SPEC>;
        ///Field `ACME` reader - Analog Comparator Multiplexer Enable
        pub type ACME_R = crate::BitReader;
        ///Field `ACME` writer - Analog Comparator Multiplexer Enable
        pub type ACME_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 6 - Analog Comparator Multiplexer Enable
            #[inline(always)]
            pub fn acme(&self) -> ACME_R {
                ACME_R::new(((self.bits >> 6) & 1) != 0)
            }
        }
        impl W {
            ///Bit 6 - Analog Comparator Multiplexer Enable
            #[inline(always)]
            pub fn acme(&mut self) -> ACME_W<'_, ADCSRB_SPEC> {
                ACME_W::new(self, 6)
            }
        }
        /**ADC Control and Status Register B

You can [`read`](crate::Reg::read) this register and get [`adcsrb::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`adcsrb::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct ADCSRB_SPEC;
        impl crate::RegisterSpec for ADCSRB_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`adcsrb::R`](R) reader structure
        impl crate::Readable for ADCSRB_SPEC {}
        ///`write(|w| ..)` method takes [`adcsrb::W`](W) writer structure
        impl crate::Writable for ADCSRB_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets ADCSRB to value 0
        impl crate::Resettable for ADCSRB_SPEC {}
    }
    /**DIDR0 (rw) register accessor: Digital Input Disable Register 0

You can [`read`](crate::Reg::read) this register and get [`didr0::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`didr0::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@didr0`] module*/
    pub type DIDR0 = crate::Reg<didr0::DIDR0_SPEC>;
    ///Digital Input Disable Register 0
    pub mod didr0 {
        ///Register `DIDR0` reader
        pub type R = crate::R<DIDR0_SPEC>;
        ///Register `DIDR0` writer
        pub type W = crate::W<DIDR0_SPEC>;
        ///Field `AIN0D` reader - AIN0 Digital Input Disable
        pub type AIN0D_R = crate::BitReader;
        ///Field `AIN0D` writer - AIN0 Digital Input Disable
        pub type AIN0D_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `AIN1D` reader - AIN1 Digital Input Disable
        pub type AIN1D_R = crate::BitReader;
        ///Field `AIN1D` writer - AIN1 Digital Input Disable
        pub type AIN1D_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - AIN0 Digital Input Disable
            #[inline(always)]
            pub fn ain0d(&self) -> AIN0D_R {
                AIN0D_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - AIN1 Digital Input Disable
            #[inline(always)]
            pub fn ain1d(&self) -> AIN1D_R {
                AIN1D_R::new(((self.bits >> 1) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - AIN0 Digital Input Disable
            #[inline(always)]
            pub fn ain0d(&mut self) -> AIN0D_W<'_, DIDR0_SPEC> {
                AIN0D_W::new(self, 0)
            }
            ///Bit 1 - AIN1 Digital Input Disable
            #[inline(always)]
            pub fn ain1d(&mut self) -> AIN1D_W<'_, DIDR0_SPEC> {
                AIN1D_W::new(self, 1)
            }
        }
        /**Digital Input Disable Register 0

You can [`read`](crate::Reg::read) this register and get [`didr0::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`didr0::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct DIDR0_SPEC;
        impl crate::RegisterSpec for DIDR0_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`didr0::R`](R) reader structure
        impl crate::Readable for DIDR0_SPEC {}
        ///`write(|w| ..)` method takes [`didr0::W`](W) writer structure
        impl crate::Writable for DIDR0_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets DIDR0 to value 0
        impl crate::Resettable for DIDR0_SPEC {}
    }
}
///Analog-to-Digital Converter
pub type ADC = crate::Periph<adc::RegisterBlock, 0x23>;
impl core::fmt::Debug for ADC {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("ADC").finish()
    }
}
///Analog-to-Digital Converter
pub mod adc {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        adcsrb: ADCSRB,
        adc: ADC,
        adcsra: ADCSRA,
        admux: ADMUX,
        _reserved4: [u8; 0x0c],
        didr0: DIDR0,
    }
    impl RegisterBlock {
        ///0x00 - ADC Control and Status Register B
        #[inline(always)]
        pub const fn adcsrb(&self) -> &ADCSRB {
            &self.adcsrb
        }
        ///0x01 - ADC Data Register Bytes
        #[inline(always)]
        pub const fn adc(&self) -> &ADC {
            &self.adc
        }
        ///0x03 - ADC Control and Status Register A
        #[inline(always)]
        pub const fn adcsra(&self) -> &ADCSRA {
            &self.adcsra
        }
        ///0x04 - The ADC multiplexer Selection Register
        #[inline(always)]
        pub const fn admux(&self) -> &ADMUX {
            &self.admux
        }
        ///0x11 - Digital Input Disable Register 0
        #[inline(always)]
        pub const fn didr0(&self) -> &DIDR0 {
            &self.didr0
        }
    }
    /**ADC (rw) register accessor: ADC Data Register Bytes

You can [`read`](crate::Reg::read) this register and get [`adc::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`adc::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@adc`] module*/
    pub type ADC = crate::Reg<adc::ADC_SPEC>;
    ///ADC Data Register Bytes
    pub mod adc {
        ///Register `ADC` reader
        pub type R = crate::R<ADC_SPEC>;
        ///Register `ADC` writer
        pub type W = crate::W<ADC_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**ADC Data Register Bytes

You can [`read`](crate::Reg::read) this register and get [`adc::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`adc::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct ADC_SPEC;
        impl crate::RegisterSpec for ADC_SPEC {
            type Ux = u16;
        }
        ///`read()` method returns [`adc::R`](R) reader structure
        impl crate::Readable for ADC_SPEC {}
        ///`write(|w| ..)` method takes [`adc::W`](W) writer structure
        impl crate::Writable for ADC_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets ADC to value 0
        impl crate::Resettable for ADC_SPEC {}
    }
    /**ADCSRA (rw) register accessor: ADC Control and Status Register A

You can [`read`](crate::Reg::read) this register and get [`adcsra::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`adcsra::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@adcsra`] module*/
    pub type ADCSRA = crate::Reg<adcsra::ADCSRA_SPEC>;
    ///ADC Control and Status Register A
    pub mod adcsra {
        ///Register `ADCSRA` reader
        pub type R = crate::R<ADCSRA_SPEC>;
        ///Register `ADCSRA` writer
        pub type W = crate::W<ADCSRA_SPEC>;
        /**ADC Prescaler Select Bits

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum ADPS_A {
            ///1: Prescaler Value 2
            PRESCALER_2 = 1,
            ///2: Prescaler Value 4
            PRESCALER_4 = 2,
            ///3: Prescaler Value 8
            PRESCALER_8 = 3,
            ///4: Prescaler Value 16
            PRESCALER_16 = 4,
            ///5: Prescaler Value 32
            PRESCALER_32 = 5,
            ///6: Prescaler Value 64
            PRESCALER_64 = 6,
            ///7: Prescaler Value 128
            PRESCALER_128 = 7,
        }
        impl From<ADPS_A> for u8 {
            #[inline(always)]
            fn from(variant: ADPS_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for ADPS_A {
            type Ux = u8;
        }
        impl crate::IsEnum for ADPS_A {}
        ///Field `ADPS` reader - ADC Prescaler Select Bits
        pub type ADPS_R = crate::FieldReader<ADPS_A>;
        impl ADPS_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> Option<ADPS_A> {
                match self.bits {
                    1 => Some(ADPS_A::PRESCALER_2),
                    2 => Some(ADPS_A::PRESCALER_4),
                    3 => Some(ADPS_A::PRESCALER_8),
                    4 => Some(ADPS_A::PRESCALER_16),
                    5 => Some(ADPS_A::PRESCALER_32),
                    6 => Some(ADPS_A::PRESCALER_64),
                    7 => Some(ADPS_A::PRESCALER_128),
                    _ => None,
                }
            }
            ///Prescaler Value 2
            #[inline(always)]
            pub fn is_prescaler_2(&self) -> bool {
                *self == ADPS_A::PRESCALER_2
            }
            ///Prescaler Value 4
            #[inline(always)]
            pub fn is_prescaler_4(&self) -> bool {
                *self == ADPS_A::PRESCALER_4
            }
            ///Prescaler Value 8
            #[inline(always)]
            pub fn is_prescaler_8(&self) -> bool {
                *self == ADPS_A::PRESCALER_8
            }
            ///Prescaler Value 16
            #[inline(always)]
            pub fn is_prescaler_16(&self) -> bool {
                *self == ADPS_A::PRESCALER_16
            }
            ///Prescaler Value 32
            #[inline(always)]
            pub fn is_prescaler_32(&self) -> bool {
                *self == ADPS_A::PRESCALER_32
            }
            ///Prescaler Value 64
            #[inline(always)]
            pub fn is_prescaler_64(&self) -> bool {
                *self == ADPS_A::PRESCALER_64
            }
            ///Prescaler Value 128
            #[inline(always)]
            pub fn is_prescaler_128(&self) -> bool {
                *self == ADPS_A::PRESCALER_128
            }
        }
        ///Field `ADPS` writer - ADC Prescaler Select Bits
        pub type ADPS_W<'a, REG> = crate::FieldWriter<'a, REG, 3, ADPS_A>;
        impl<'a, REG> ADPS_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Prescaler Value 2
            #[inline(always)]
            pub fn prescaler_2(self) -> &'a mut crate::W<REG> {
                self.variant(ADPS_A::PRESCALER_2)
            }
            ///Prescaler Value 4
            #[inline(always)]
            pub fn prescaler_4(self) -> &'a mut crate::W<REG> {
                self.variant(ADPS_A::PRESCALER_4)
            }
            ///Prescaler Value 8
            #[inline(always)]
            pub fn prescaler_8(self) -> &'a mut crate::W<REG> {
                self.variant(ADPS_A::PRESCALER_8)
            }
            ///Prescaler Value 16
            #[inline(always)]
            pub fn prescaler_16(self) -> &'a mut crate::W<REG> {
                self.variant(ADPS_A::PRESCALER_16)
            }
            ///Prescaler Value 32
            #[inline(always)]
            pub fn prescaler_32(self) -> &'a mut crate::W<REG> {
                self.variant(ADPS_A::PRESCALER_32)
            }
            ///Prescaler Value 64
            #[inline(always)]
            pub fn prescaler_64(self) -> &'a mut crate::W<REG> {
                self.variant(ADPS_A::PRESCALER_64)
            }
            ///Prescaler Value 128
            #[inline(always)]
            pub fn prescaler_128(self) -> &'a mut crate::W<REG> {
                self.variant(ADPS_A::PRESCALER_128)
            }
        }
        ///Field `ADIE` reader - ADC Interrupt Enable
        pub type ADIE_R = crate::BitReader;
        ///Field `ADIE` writer - ADC Interrupt Enable
        pub type ADIE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ADIF` reader - ADC Interrupt Flag
        pub type ADIF_R = crate::BitReader;
        ///Field `ADIF` writer - ADC Interrupt Flag
        pub type ADIF_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ADATE` reader - ADC Auto Trigger Enable
        pub type ADATE_R = crate::BitReader;
        ///Field `ADATE` writer - ADC Auto Trigger Enable
        pub type ADATE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ADSC` reader - ADC Start Conversion
        pub type ADSC_R = crate::BitReader;
        ///Field `ADSC` writer - ADC Start Conversion
        pub type ADSC_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ADEN` reader - ADC Enable
        pub type ADEN_R = crate::BitReader;
        ///Field `ADEN` writer - ADC Enable
        pub type ADEN_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bits 0:2 - ADC Prescaler Select Bits
            #[inline(always)]
            pub fn adps(&self) -> ADPS_R {
                ADPS_R::new(self.bits & 7)
            }
            ///Bit 3 - ADC Interrupt Enable
            #[inline(always)]
            pub fn adie(&self) -> ADIE_R {
                ADIE_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - ADC Interrupt Flag
            #[inline(always)]
            pub fn adif(&self) -> ADIF_R {
                ADIF_R::new(((self.bits >> 4) & 1) != 0)
            }
            ///Bit 5 - ADC Auto Trigger Enable
            #[inline(always)]
            pub fn adate(&self) -> ADATE_R {
                ADATE_R::new(((self.bits >> 5) & 1) != 0)
            }
            ///Bit 6 - ADC Start Conversion
            #[inline(always)]
            pub fn adsc(&self) -> ADSC_R {
                ADSC_R::new(((self.bits >> 6) & 1) != 0)
            }
            ///Bit 7 - ADC Enable
            #[inline(always)]
            pub fn aden(&self) -> ADEN_R {
                ADEN_R::new(((self.bits >> 7) & 1) != 0)
            }
        }
        impl W {
            ///Bits 0:2 - ADC Prescaler Select Bits
            #[inline(always)]
            pub fn adps(&mut self) -> ADPS_W<'_, ADCSRA_SPEC> {
                ADPS_W::new(self, 0)
            }
            ///Bit 3 - ADC Interrupt Enable
            #[inline(always)]
            pub fn adie(&mut self) -> ADIE_W<'_, ADCSRA_SPEC> {
                ADIE_W::new(self, 3)
            }
            ///Bit 4 - ADC Interrupt Flag
            #[inline(always)]
            pub fn adif(&mut self) -> ADIF_W<'_, ADCSRA_SPEC> {
                ADIF_W::new(self, 4)
            }
            ///Bit 5 - ADC Auto Trigger Enable
            #[inline(always)]
            pub fn adate(&mut self) -> ADATE_W<'_, ADCSRA_SPEC> {
                ADATE_W::new(self, 5)
            }
            ///Bit 6 - ADC Start Conversion
            #[inline(always)]
            pub fn adsc(&mut self) -> ADSC_W<'_, ADCSRA_SPEC> {
                ADSC_W::new(self, 6)
            }
            ///Bit 7 - ADC Enable
            #[inline(always)]
            pub fn aden(&mut self) -> ADEN_W<'_, ADCSRA_SPEC> {
                ADEN_W::new(self, 7)
            }
        }
        /**ADC Control and Status Register A

You can [`read`](crate::Reg::read) this register and get [`adcsra::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`adcsra::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct ADCSRA_SPEC;
        impl crate::RegisterSpec for ADCSRA_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`adcsra::R`](R) reader structure
        impl crate::Readable for ADCSRA_SPEC {}
        ///`write(|w| ..)` method takes [`adcsra::W`](W) writer structure
        impl crate::Writable for ADCSRA_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets ADCSRA to value 0
        impl crate::Resettable for ADCSRA_SPEC {}
    }
    /**ADCSRB (rw) register accessor: ADC Control and Status Register B

You can [`read`](crate::Reg::read) this register and get [`adcsrb::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`adcsrb::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@adcsrb`] module*/
    pub type ADCSRB = crate::Reg<adcsrb::ADCSRB_SPEC>;
    ///ADC Control and Status Register B
    pub mod adcsrb {
        ///Register `ADCSRB` reader
        pub type R = crate::R<ADCSRB_SPEC>;
        ///Register `ADCSRB` writer
        pub type W = crate::W<ADCSRB_SPEC>;
        /**ADC Auto Trigger Sources

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum ADTS_A {
            ///0: Free Running mode
            FREE = 0,
            ///1: Analog Comparator
            AC = 1,
            ///2: External Interrupt Request 0
            INT0 = 2,
            ///3: Timer/Counter0 Compare Match A
            TC0_CMA = 3,
            ///4: Timer/Counter0 Overflow
            TC0_OVF = 4,
            ///5: Timer/Counter0 Compare Match B
            TC0_CMB = 5,
            ///6: Pin Change Interrupt Request
            PCIR = 6,
        }
        impl From<ADTS_A> for u8 {
            #[inline(always)]
            fn from(variant: ADTS_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for ADTS_A {
            type Ux = u8;
        }
        impl crate::IsEnum for ADTS_A {}
        ///Field `ADTS` reader - ADC Auto Trigger Sources
        pub type ADTS_R = crate::FieldReader<ADTS_A>;
        impl ADTS_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> Option<ADTS_A> {
                match self.bits {
                    0 => Some(ADTS_A::FREE),
                    1 => Some(ADTS_A::AC),
                    2 => Some(ADTS_A::INT0),
                    3 => Some(ADTS_A::TC0_CMA),
                    4 => Some(ADTS_A::TC0_OVF),
                    5 => Some(ADTS_A::TC0_CMB),
                    6 => Some(ADTS_A::PCIR),
                    _ => None,
                }
            }
            ///Free Running mode
            #[inline(always)]
            pub fn is_free(&self) -> bool {
                *self == ADTS_A::FREE
            }
            ///Analog Comparator
            #[inline(always)]
            pub fn is_ac(&self) -> bool {
                *self == ADTS_A::AC
            }
            ///External Interrupt Request 0
            #[inline(always)]
            pub fn is_int0(&self) -> bool {
                *self == ADTS_A::INT0
            }
            ///Timer/Counter0 Compare Match A
            #[inline(always)]
            pub fn is_tc0_cma(&self) -> bool {
                *self == ADTS_A::TC0_CMA
            }
            ///Timer/Counter0 Overflow
            #[inline(always)]
            pub fn is_tc0_ovf(&self) -> bool {
                *self == ADTS_A::TC0_OVF
            }
            ///Timer/Counter0 Compare Match B
            #[inline(always)]
            pub fn is_tc0_cmb(&self) -> bool {
                *self == ADTS_A::TC0_CMB
            }
            ///Pin Change Interrupt Request
            #[inline(always)]
            pub fn is_pcir(&self) -> bool {
                *self == ADTS_A::PCIR
            }
        }
        ///Field `ADTS` writer - ADC Auto Trigger Sources
        pub type ADTS_W<'a, REG> = crate::FieldWriter<'a, REG, 3, ADTS_A>;
        impl<'a, REG> ADTS_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Free Running mode
            #[inline(always)]
            pub fn free(self) -> &'a mut crate::W<REG> {
                self.variant(ADTS_A::FREE)
            }
            ///Analog Comparator
            #[inline(always)]
            pub fn ac(self) -> &'a mut crate::W<REG> {
                self.variant(ADTS_A::AC)
            }
            ///External Interrupt Request 0
            #[inline(always)]
            pub fn int0(self) -> &'a mut crate::W<REG> {
                self.variant(ADTS_A::INT0)
            }
            ///Timer/Counter0 Compare Match A
            #[inline(always)]
            pub fn tc0_cma(self) -> &'a mut crate::W<REG> {
                self.variant(ADTS_A::TC0_CMA)
            }
            ///Timer/Counter0 Overflow
            #[inline(always)]
            pub fn tc0_ovf(self) -> &'a mut crate::W<REG> {
                self.variant(ADTS_A::TC0_OVF)
            }
            ///Timer/Counter0 Compare Match B
            #[inline(always)]
            pub fn tc0_cmb(self) -> &'a mut crate::W<REG> {
                self.variant(ADTS_A::TC0_CMB)
            }
            ///Pin Change Interrupt Request
            #[inline(always)]
            pub fn pcir(self) -> &'a mut crate::W<REG> {
                self.variant(ADTS_A::PCIR)
            }
        }
        impl R {
            ///Bits 0:2 - ADC Auto Trigger Sources
            #[inline(always)]
            pub fn adts(&self) -> ADTS_R {
                ADTS_R::new(self.bits & 7)
            }
        }
        impl W {
            ///Bits 0:2 - ADC Auto Trigger Sources
            #[inline(always)]
            pub fn adts(&mut self) -> ADTS_W<'_, ADCSRB_SPEC> {
                ADTS_W::new(self, 0)
            }
        }
        /**ADC Control and Status Register B

You can [`read`](crate::Reg::read) this register and get [`adcsrb::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`adcsrb::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct ADCSRB_SPEC;
        impl crate::RegisterSpec for ADCSRB_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`adcsrb::R`](R) reader structure
        impl crate::Readable for ADCSRB_SPEC {}
        ///`write(|w| ..)` method takes [`adcsrb::W`](W) writer structure
        impl crate::Writable for ADCSRB_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets ADCSRB to value 0
        impl crate::Resettable for ADCSRB_SPEC {}
    }
    /**ADMUX (rw) register accessor: The ADC multiplexer Selection Register

You can [`read`](crate::Reg::read) this register and get [`admux::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`admux::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@admux`] module*/
    pub type ADMUX = crate::Reg<admux::ADMUX_SPEC>;
    ///The ADC multiplexer Selection Register
    pub mod admux {
        ///Register `ADMUX` reader
        pub type R = crate::R<ADMUX_SPEC>;
        ///Register `ADMUX` writer
        pub type W = crate::W<ADMUX_SPEC>;
        /**Analog Channel and Gain Selection Bits

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum MUX_A {
            ///0: Single-ended Input ADC0
            ADC0 = 0,
            ///1: Single-ended Input ADC1
            ADC1 = 1,
            ///2: Single-ended Input ADC2
            ADC2 = 2,
            ///3: Single-ended Input ADC3
            ADC3 = 3,
        }
        impl From<MUX_A> for u8 {
            #[inline(always)]
            fn from(variant: MUX_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for MUX_A {
            type Ux = u8;
        }
        impl crate::IsEnum for MUX_A {}
        ///Field `MUX` reader - Analog Channel and Gain Selection Bits
        pub type MUX_R = crate::FieldReader<MUX_A>;
        impl MUX_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> MUX_A {
                match self.bits {
                    0 => MUX_A::ADC0,
                    1 => MUX_A::ADC1,
                    2 => MUX_A::ADC2,
                    3 => MUX_A::ADC3,
                    _ => unreachable!(),
                }
            }
            ///Single-ended Input ADC0
            #[inline(always)]
            pub fn is_adc0(&self) -> bool {
                *self == MUX_A::ADC0
            }
            ///Single-ended Input ADC1
            #[inline(always)]
            pub fn is_adc1(&self) -> bool {
                *self == MUX_A::ADC1
            }
            ///Single-ended Input ADC2
            #[inline(always)]
            pub fn is_adc2(&self) -> bool {
                *self == MUX_A::ADC2
            }
            ///Single-ended Input ADC3
            #[inline(always)]
            pub fn is_adc3(&self) -> bool {
                *self == MUX_A::ADC3
            }
        }
        ///Field `MUX` writer - Analog Channel and Gain Selection Bits
        pub type MUX_W<'a, REG> = crate::FieldWriter<'a, REG, 2, MUX_A, crate::Safe>;
        impl<'a, REG> MUX_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Single-ended Input ADC0
            #[inline(always)]
            pub fn adc0(self) -> &'a mut crate::W<REG> {
                self.variant(MUX_A::ADC0)
            }
            ///Single-ended Input ADC1
            #[inline(always)]
            pub fn adc1(self) -> &'a mut crate::W<REG> {
                self.variant(MUX_A::ADC1)
            }
            ///Single-ended Input ADC2
            #[inline(always)]
            pub fn adc2(self) -> &'a mut crate::W<REG> {
                self.variant(MUX_A::ADC2)
            }
            ///Single-ended Input ADC3
            #[inline(always)]
            pub fn adc3(self) -> &'a mut crate::W<REG> {
                self.variant(MUX_A::ADC3)
            }
        }
        ///Field `ADLAR` reader - Left Adjust Result
        pub type ADLAR_R = crate::BitReader;
        ///Field `ADLAR` writer - Left Adjust Result
        pub type ADLAR_W<'a, REG> = crate::BitWriter<'a, REG>;
        /**Reference Selection Bit 0

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum REFS0_A {
            ///0: Vcc used as Voltage Reference
            VCC = 0,
            ///1: Internal Voltage Reference of 1.1V
            INTERNAL = 1,
        }
        impl From<REFS0_A> for bool {
            #[inline(always)]
            fn from(variant: REFS0_A) -> Self {
                variant as u8 != 0
            }
        }
        ///Field `REFS0` reader - Reference Selection Bit 0
        pub type REFS0_R = crate::BitReader<REFS0_A>;
        impl REFS0_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> REFS0_A {
                match self.bits {
                    false => REFS0_A::VCC,
                    true => REFS0_A::INTERNAL,
                }
            }
            ///Vcc used as Voltage Reference
            #[inline(always)]
            pub fn is_vcc(&self) -> bool {
                *self == REFS0_A::VCC
            }
            ///Internal Voltage Reference of 1.1V
            #[inline(always)]
            pub fn is_internal(&self) -> bool {
                *self == REFS0_A::INTERNAL
            }
        }
        ///Field `REFS0` writer - Reference Selection Bit 0
        pub type REFS0_W<'a, REG> = crate::BitWriter<'a, REG, REFS0_A>;
        impl<'a, REG> REFS0_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
        {
            ///Vcc used as Voltage Reference
            #[inline(always)]
            pub fn vcc(self) -> &'a mut crate::W<REG> {
                self.variant(REFS0_A::VCC)
            }
            ///Internal Voltage Reference of 1.1V
            #[inline(always)]
            pub fn internal(self) -> &'a mut crate::W<REG> {
                self.variant(REFS0_A::INTERNAL)
            }
        }
        impl R {
            ///Bits 0:1 - Analog Channel and Gain Selection Bits
            #[inline(always)]
            pub fn mux(&self) -> MUX_R {
                MUX_R::new(self.bits & 3)
            }
            ///Bit 5 - Left Adjust Result
            #[inline(always)]
            pub fn adlar(&self) -> ADLAR_R {
                ADLAR_R::new(((self.bits >> 5) & 1) != 0)
            }
            ///Bit 6 - Reference Selection Bit 0
            #[inline(always)]
            pub fn refs0(&self) -> REFS0_R {
                REFS0_R::new(((self.bits >> 6) & 1) != 0)
            }
        }
        impl W {
            ///Bits 0:1 - Analog Channel and Gain Selection Bits
            #[inline(always)]
            pub fn mux(&mut self) -> MUX_W<'_, ADMUX_SPEC> {
                MUX_W::new(self, 0)
            }
            ///Bit 5 - Left Adjust Result
            #[inline(always)]
            pub fn adlar(&mut self) -> ADLAR_W<'_, ADMUX_SPEC> {
                ADLAR_W::new(self, 5)
            }
            ///Bit 6 - Reference Selection Bit 0
            #[inline(always)]
            pub fn refs0(&mut self) -> REFS0_W<'_, ADMUX_SPEC> {
                REFS0_W::new(self, 6)
            }
        }
        /**The ADC multiplexer Selection Register

You can [`read`](crate::Reg::read) this register and get [`admux::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`admux::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct ADMUX_SPEC;
        impl crate::RegisterSpec for ADMUX_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`admux::R`](R) reader structure
        impl crate::Readable for ADMUX_SPEC {}
        ///`write(|w| ..)` method takes [`admux::W`](W) writer structure
        impl crate::Writable for ADMUX_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets ADMUX to value 0
        impl crate::Resettable for ADMUX_SPEC {}
    }
    /**DIDR0 (rw) register accessor: Digital Input Disable Register 0

You can [`read`](crate::Reg::read) this register and get [`didr0::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`didr0::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@didr0`] module*/
    pub type DIDR0 = crate::Reg<didr0::DIDR0_SPEC>;
    ///Digital Input Disable Register 0
    pub mod didr0 {
        ///Register `DIDR0` reader
        pub type R = crate::R<DIDR0_SPEC>;
        ///Register `DIDR0` writer
        pub type W = crate::W<DIDR0_SPEC>;
        ///Field `ADC1D` reader - ADC2 Digital input Disable
        pub type ADC1D_R = crate::BitReader;
        ///Field `ADC1D` writer - ADC2 Digital input Disable
        pub type ADC1D_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ADC3D` reader - ADC3 Digital input Disable
        pub type ADC3D_R = crate::BitReader;
        ///Field `ADC3D` writer - ADC3 Digital input Disable
        pub type ADC3D_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ADC2D` reader - ADC2 Digital input Disable
        pub type ADC2D_R = crate::BitReader;
        ///Field `ADC2D` writer - ADC2 Digital input Disable
        pub type ADC2D_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `ADC0D` reader - ADC0 Digital input Disable
        pub type ADC0D_R = crate::BitReader;
        ///Field `ADC0D` writer - ADC0 Digital input Disable
        pub type ADC0D_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 2 - ADC2 Digital input Disable
            #[inline(always)]
            pub fn adc1d(&self) -> ADC1D_R {
                ADC1D_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - ADC3 Digital input Disable
            #[inline(always)]
            pub fn adc3d(&self) -> ADC3D_R {
                ADC3D_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - ADC2 Digital input Disable
            #[inline(always)]
            pub fn adc2d(&self) -> ADC2D_R {
                ADC2D_R::new(((self.bits >> 4) & 1) != 0)
            }
            ///Bit 5 - ADC0 Digital input Disable
            #[inline(always)]
            pub fn adc0d(&self) -> ADC0D_R {
                ADC0D_R::new(((self.bits >> 5) & 1) != 0)
            }
        }
        impl W {
            ///Bit 2 - ADC2 Digital input Disable
            #[inline(always)]
            pub fn adc1d(&mut self) -> ADC1D_W<'_, DIDR0_SPEC> {
                ADC1D_W::new(self, 2)
            }
            ///Bit 3 - ADC3 Digital input Disable
            #[inline(always)]
            pub fn adc3d(&mut self) -> ADC3D_W<'_, DIDR0_SPEC> {
                ADC3D_W::new(self, 3)
            }
            ///Bit 4 - ADC2 Digital input Disable
            #[inline(always)]
            pub fn adc2d(&mut self) -> ADC2D_W<'_, DIDR0_SPEC> {
                ADC2D_W::new(self, 4)
            }
            ///Bit 5 - ADC0 Digital input Disable
            #[inline(always)]
            pub fn adc0d(&mut self) -> ADC0D_W<'_, DIDR0_SPEC> {
                ADC0D_W::new(self, 5)
            }
        }
        /**Digital Input Disable Register 0

You can [`read`](crate::Reg::read) this register and get [`didr0::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`didr0::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct DIDR0_SPEC;
        impl crate::RegisterSpec for DIDR0_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`didr0::R`](R) reader structure
        impl crate::Readable for DIDR0_SPEC {}
        ///`write(|w| ..)` method takes [`didr0::W`](W) writer structure
        impl crate::Writable for DIDR0_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets DIDR0 to value 0
        impl crate::Resettable for DIDR0_SPEC {}
    }
}
///CPU Registers
pub type CPU = crate::Periph<cpu::RegisterBlock, 0x45>;
impl core::fmt::Debug for CPU {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("CPU").finish()
    }
}
///CPU Registers
pub mod cpu {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        prr: PRR,
        clkpr: CLKPR,
        _reserved2: [u8; 0x07],
        dwdr: DWDR,
        _reserved3: [u8; 0x01],
        bodcr: BODCR,
        osccal: OSCCAL,
        _reserved5: [u8; 0x02],
        mcusr: MCUSR,
        mcucr: MCUCR,
        _reserved7: [u8; 0x01],
        spmcsr: SPMCSR,
        _reserved8: [u8; 0x05],
        spl: SPL,
    }
    impl RegisterBlock {
        ///0x00 - Power Reduction Register
        #[inline(always)]
        pub const fn prr(&self) -> &PRR {
            &self.prr
        }
        ///0x01 - Clock Prescale Register
        #[inline(always)]
        pub const fn clkpr(&self) -> &CLKPR {
            &self.clkpr
        }
        ///0x09 - Debug Wire Data Register
        #[inline(always)]
        pub const fn dwdr(&self) -> &DWDR {
            &self.dwdr
        }
        ///0x0b - BOD Control Register
        #[inline(always)]
        pub const fn bodcr(&self) -> &BODCR {
            &self.bodcr
        }
        ///0x0c - Oscillator Calibration Register
        #[inline(always)]
        pub const fn osccal(&self) -> &OSCCAL {
            &self.osccal
        }
        ///0x0f - MCU Status register
        #[inline(always)]
        pub const fn mcusr(&self) -> &MCUSR {
            &self.mcusr
        }
        ///0x10 - MCU Control Register
        #[inline(always)]
        pub const fn mcucr(&self) -> &MCUCR {
            &self.mcucr
        }
        ///0x12 - Store Program Memory Control and Status Register
        #[inline(always)]
        pub const fn spmcsr(&self) -> &SPMCSR {
            &self.spmcsr
        }
        ///0x18 - Stack Pointer Low Byte
        #[inline(always)]
        pub const fn spl(&self) -> &SPL {
            &self.spl
        }
    }
    /**BODCR (rw) register accessor: BOD Control Register

You can [`read`](crate::Reg::read) this register and get [`bodcr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`bodcr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@bodcr`] module*/
    pub type BODCR = crate::Reg<bodcr::BODCR_SPEC>;
    ///BOD Control Register
    pub mod bodcr {
        ///Register `BODCR` reader
        pub type R = crate::R<BODCR_SPEC>;
        ///Register `BODCR` writer
        pub type W = crate::W<BODCR_SPEC>;
        ///Field `BODSE` reader - BOD Power-Down Sleep Enable
        pub type BODSE_R = crate::BitReader;
        ///Field `BODSE` writer - BOD Power-Down Sleep Enable
        pub type BODSE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `BODS` reader - BOD Power-Down in Power-Down Sleep
        pub type BODS_R = crate::BitReader;
        ///Field `BODS` writer - BOD Power-Down in Power-Down Sleep
        pub type BODS_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - BOD Power-Down Sleep Enable
            #[inline(always)]
            pub fn bodse(&self) -> BODSE_R {
                BODSE_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - BOD Power-Down in Power-Down Sleep
            #[inline(always)]
            pub fn bods(&self) -> BODS_R {
                BODS_R::new(((self.bits >> 1) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - BOD Power-Down Sleep Enable
            #[inline(always)]
            pub fn bodse(&mut self) -> BODSE_W<'_, BODCR_SPEC> {
                BODSE_W::new(self, 0)
            }
            ///Bit 1 - BOD Power-Down in Power-Down Sleep
            #[inline(always)]
            pub fn bods(&mut self) -> BODS_W<'_, BODCR_SPEC> {
                BODS_W::new(self, 1)
            }
        }
        /**BOD Control Register

You can [`read`](crate::Reg::read) this register and get [`bodcr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`bodcr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct BODCR_SPEC;
        impl crate::RegisterSpec for BODCR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`bodcr::R`](R) reader structure
        impl crate::Readable for BODCR_SPEC {}
        ///`write(|w| ..)` method takes [`bodcr::W`](W) writer structure
        impl crate::Writable for BODCR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets BODCR to value 0
        impl crate::Resettable for BODCR_SPEC {}
    }
    /**CLKPR (rw) register accessor: Clock Prescale Register

You can [`read`](crate::Reg::read) this register and get [`clkpr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`clkpr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@clkpr`] module*/
    pub type CLKPR = crate::Reg<clkpr::CLKPR_SPEC>;
    ///Clock Prescale Register
    pub mod clkpr {
        ///Register `CLKPR` reader
        pub type R = crate::R<CLKPR_SPEC>;
        ///Register `CLKPR` writer
        pub type W = crate::W<CLKPR_SPEC>;
        /**Clock Prescaler Select Bits

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum CLKPS_A {
            ///0: Prescaler Value 1
            PRESCALER_1 = 0,
            ///1: Prescaler Value 2
            PRESCALER_2 = 1,
            ///2: Prescaler Value 4
            PRESCALER_4 = 2,
            ///3: Prescaler Value 8
            PRESCALER_8 = 3,
            ///4: Prescaler Value 16
            PRESCALER_16 = 4,
            ///5: Prescaler Value 32
            PRESCALER_32 = 5,
            ///6: Prescaler Value 64
            PRESCALER_64 = 6,
            ///7: Prescaler Value 128
            PRESCALER_128 = 7,
            ///8: Prescaler Value 256
            PRESCALER_256 = 8,
        }
        impl From<CLKPS_A> for u8 {
            #[inline(always)]
            fn from(variant: CLKPS_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for CLKPS_A {
            type Ux = u8;
        }
        impl crate::IsEnum for CLKPS_A {}
        ///Field `CLKPS` reader - Clock Prescaler Select Bits
        pub type CLKPS_R = crate::FieldReader<CLKPS_A>;
        impl CLKPS_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> Option<CLKPS_A> {
                match self.bits {
                    0 => Some(CLKPS_A::PRESCALER_1),
                    1 => Some(CLKPS_A::PRESCALER_2),
                    2 => Some(CLKPS_A::PRESCALER_4),
                    3 => Some(CLKPS_A::PRESCALER_8),
                    4 => Some(CLKPS_A::PRESCALER_16),
                    5 => Some(CLKPS_A::PRESCALER_32),
                    6 => Some(CLKPS_A::PRESCALER_64),
                    7 => Some(CLKPS_A::PRESCALER_128),
                    8 => Some(CLKPS_A::PRESCALER_256),
                    _ => None,
                }
            }
            ///Prescaler Value 1
            #[inline(always)]
            pub fn is_prescaler_1(&self) -> bool {
                *self == CLKPS_A::PRESCALER_1
            }
            ///Prescaler Value 2
            #[inline(always)]
            pub fn is_prescaler_2(&self) -> bool {
                *self == CLKPS_A::PRESCALER_2
            }
            ///Prescaler Value 4
            #[inline(always)]
            pub fn is_prescaler_4(&self) -> bool {
                *self == CLKPS_A::PRESCALER_4
            }
            ///Prescaler Value 8
            #[inline(always)]
            pub fn is_prescaler_8(&self) -> bool {
                *self == CLKPS_A::PRESCALER_8
            }
            ///Prescaler Value 16
            #[inline(always)]
            pub fn is_prescaler_16(&self) -> bool {
                *self == CLKPS_A::PRESCALER_16
            }
            ///Prescaler Value 32
            #[inline(always)]
            pub fn is_prescaler_32(&self) -> bool {
                *self == CLKPS_A::PRESCALER_32
            }
            ///Prescaler Value 64
            #[inline(always)]
            pub fn is_prescaler_64(&self) -> bool {
                *self == CLKPS_A::PRESCALER_64
            }
            ///Prescaler Value 128
            #[inline(always)]
            pub fn is_prescaler_128(&self) -> bool {
                *self == CLKPS_A::PRESCALER_128
            }
            ///Prescaler Value 256
            #[inline(always)]
            pub fn is_prescaler_256(&self) -> bool {
                *self == CLKPS_A::PRESCALER_256
            }
        }
        ///Field `CLKPS` writer - Clock Prescaler Select Bits
        pub type CLKPS_W<'a, REG> = crate::FieldWriter<'a, REG, 4, CLKPS_A>;
        impl<'a, REG> CLKPS_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Prescaler Value 1
            #[inline(always)]
            pub fn prescaler_1(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_1)
            }
            ///Prescaler Value 2
            #[inline(always)]
            pub fn prescaler_2(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_2)
            }
            ///Prescaler Value 4
            #[inline(always)]
            pub fn prescaler_4(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_4)
            }
            ///Prescaler Value 8
            #[inline(always)]
            pub fn prescaler_8(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_8)
            }
            ///Prescaler Value 16
            #[inline(always)]
            pub fn prescaler_16(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_16)
            }
            ///Prescaler Value 32
            #[inline(always)]
            pub fn prescaler_32(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_32)
            }
            ///Prescaler Value 64
            #[inline(always)]
            pub fn prescaler_64(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_64)
            }
            ///Prescaler Value 128
            #[inline(always)]
            pub fn prescaler_128(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_128)
            }
            ///Prescaler Value 256
            #[inline(always)]
            pub fn prescaler_256(self) -> &'a mut crate::W<REG> {
                self.variant(CLKPS_A::PRESCALER_256)
            }
        }
        ///Field `CLKPCE` reader - Clock Prescaler Change Enable
        pub type CLKPCE_R = crate::BitReader;
        ///Field `CLKPCE` writer - Clock Prescaler Change Enable
        pub type CLKPCE_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bits 0:3 - Clock Prescaler Select Bits
            #[inline(always)]
            pub fn clkps(&self) -> CLKPS_R {
                CLKPS_R::new(self.bits & 0x0f)
            }
            ///Bit 7 - Clock Prescaler Change Enable
            #[inline(always)]
            pub fn clkpce(&self) -> CLKPCE_R {
                CLKPCE_R::new(((self.bits >> 7) & 1) != 0)
            }
        }
        impl W {
            ///Bits 0:3 - Clock Prescaler Select Bits
            #[inline(always)]
            pub fn clkps(&mut self) -> CLKPS_W<'_, CLKPR_SPEC> {
                CLKPS_W::new(self, 0)
            }
            ///Bit 7 - Clock Prescaler Change Enable
            #[inline(always)]
            pub fn clkpce(&mut self) -> CLKPCE_W<'_, CLKPR_SPEC> {
                CLKPCE_W::new(self, 7)
            }
        }
        /**Clock Prescale Register

You can [`read`](crate::Reg::read) this register and get [`clkpr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`clkpr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct CLKPR_SPEC;
        impl crate::RegisterSpec for CLKPR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`clkpr::R`](R) reader structure
        impl crate::Readable for CLKPR_SPEC {}
        ///`write(|w| ..)` method takes [`clkpr::W`](W) writer structure
        impl crate::Writable for CLKPR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets CLKPR to value 0
        impl crate::Resettable for CLKPR_SPEC {}
    }
    /**DWDR (rw) register accessor: Debug Wire Data Register

You can [`read`](crate::Reg::read) this register and get [`dwdr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`dwdr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@dwdr`] module*/
    pub type DWDR = crate::Reg<dwdr::DWDR_SPEC>;
    ///Debug Wire Data Register
    pub mod dwdr {
        ///Register `DWDR` reader
        pub type R = crate::R<DWDR_SPEC>;
        ///Register `DWDR` writer
        pub type W = crate::W<DWDR_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**Debug Wire Data Register

You can [`read`](crate::Reg::read) this register and get [`dwdr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`dwdr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct DWDR_SPEC;
        impl crate::RegisterSpec for DWDR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`dwdr::R`](R) reader structure
        impl crate::Readable for DWDR_SPEC {}
        ///`write(|w| ..)` method takes [`dwdr::W`](W) writer structure
        impl crate::Writable for DWDR_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets DWDR to value 0
        impl crate::Resettable for DWDR_SPEC {}
    }
    /**MCUCR (rw) register accessor: MCU Control Register

You can [`read`](crate::Reg::read) this register and get [`mcucr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`mcucr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@mcucr`] module*/
    pub type MCUCR = crate::Reg<mcucr::MCUCR_SPEC>;
    ///MCU Control Register
    pub mod mcucr {
        ///Register `MCUCR` reader
        pub type R = crate::R<MCUCR_SPEC>;
        ///Register `MCUCR` writer
        pub type W = crate::W<MCUCR_SPEC>;
        ///Field `BODSE` reader - BOD Sleep Enable (available on some devices)
        pub type BODSE_R = crate::BitReader;
        ///Field `BODSE` writer - BOD Sleep Enable (available on some devices)
        pub type BODSE_W<'a, REG> = crate::BitWriter<'a, REG>;
        /**Sleep Mode Select Bits

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum SM_A {
            ///0: Idle
            IDLE = 0,
            ///1: ADC Noise Reduction (If Available)
            ADC = 1,
            ///2: Power Down
            PDOWN = 2,
            ///3: Reserved
            VAL_0X03 = 3,
        }
        impl From<SM_A> for u8 {
            #[inline(always)]
            fn from(variant: SM_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for SM_A {
            type Ux = u8;
        }
        impl crate::IsEnum for SM_A {}
        ///Field `SM` reader - Sleep Mode Select Bits
        pub type SM_R = crate::FieldReader<SM_A>;
        impl SM_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> SM_A {
                match self.bits {
                    0 => SM_A::IDLE,
                    1 => SM_A::ADC,
                    2 => SM_A::PDOWN,
                    3 => SM_A::VAL_0X03,
                    _ => unreachable!(),
                }
            }
            ///Idle
            #[inline(always)]
            pub fn is_idle(&self) -> bool {
                *self == SM_A::IDLE
            }
            ///ADC Noise Reduction (If Available)
            #[inline(always)]
            pub fn is_adc(&self) -> bool {
                *self == SM_A::ADC
            }
            ///Power Down
            #[inline(always)]
            pub fn is_pdown(&self) -> bool {
                *self == SM_A::PDOWN
            }
            ///Reserved
            #[inline(always)]
            pub fn is_val_0x03(&self) -> bool {
                *self == SM_A::VAL_0X03
            }
        }
        ///Field `SM` writer - Sleep Mode Select Bits
        pub type SM_W<'a, REG> = crate::FieldWriter<'a, REG, 2, SM_A, crate::Safe>;
        impl<'a, REG> SM_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Idle
            #[inline(always)]
            pub fn idle(self) -> &'a mut crate::W<REG> {
                self.variant(SM_A::IDLE)
            }
            ///ADC Noise Reduction (If Available)
            #[inline(always)]
            pub fn adc(self) -> &'a mut crate::W<REG> {
                self.variant(SM_A::ADC)
            }
            ///Power Down
            #[inline(always)]
            pub fn pdown(self) -> &'a mut crate::W<REG> {
                self.variant(SM_A::PDOWN)
            }
            ///Reserved
            #[inline(always)]
            pub fn val_0x03(self) -> &'a mut crate::W<REG> {
                self.variant(SM_A::VAL_0X03)
            }
        }
        ///Field `SE` reader - Sleep Enable
        pub type SE_R = crate::BitReader;
        ///Field `SE` writer - Sleep Enable
        pub type SE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PUD` reader - Pull-up Disable
        pub type PUD_R = crate::BitReader;
        ///Field `PUD` writer - Pull-up Disable
        pub type PUD_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `BODS` reader - BOD Sleep (available on some devices)
        pub type BODS_R = crate::BitReader;
        ///Field `BODS` writer - BOD Sleep (available on some devices)
        pub type BODS_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 2 - BOD Sleep Enable (available on some devices)
            #[inline(always)]
            pub fn bodse(&self) -> BODSE_R {
                BODSE_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bits 3:4 - Sleep Mode Select Bits
            #[inline(always)]
            pub fn sm(&self) -> SM_R {
                SM_R::new((self.bits >> 3) & 3)
            }
            ///Bit 5 - Sleep Enable
            #[inline(always)]
            pub fn se(&self) -> SE_R {
                SE_R::new(((self.bits >> 5) & 1) != 0)
            }
            ///Bit 6 - Pull-up Disable
            #[inline(always)]
            pub fn pud(&self) -> PUD_R {
                PUD_R::new(((self.bits >> 6) & 1) != 0)
            }
            ///Bit 7 - BOD Sleep (available on some devices)
            #[inline(always)]
            pub fn bods(&self) -> BODS_R {
                BODS_R::new(((self.bits >> 7) & 1) != 0)
            }
        }
        impl W {
            ///Bit 2 - BOD Sleep Enable (available on some devices)
            #[inline(always)]
            pub fn bodse(&mut self) -> BODSE_W<'_, MCUCR_SPEC> {
                BODSE_W::new(self, 2)
            }
            ///Bits 3:4 - Sleep Mode Select Bits
            #[inline(always)]
            pub fn sm(&mut self) -> SM_W<'_, MCUCR_SPEC> {
                SM_W::new(self, 3)
            }
            ///Bit 5 - Sleep Enable
            #[inline(always)]
            pub fn se(&mut self) -> SE_W<'_, MCUCR_SPEC> {
                SE_W::new(self, 5)
            }
            ///Bit 6 - Pull-up Disable
            #[inline(always)]
            pub fn pud(&mut self) -> PUD_W<'_, MCUCR_SPEC> {
                PUD_W::new(self, 6)
            }
            ///Bit 7 - BOD Sleep (available on some devices)
            #[inline(always)]
            pub fn bods(&mut self) -> BODS_W<'_, MCUCR_SPEC> {
                BODS_W::new(self, 7)
            }
        }
        /**MCU Control Register

You can [`read`](crate::Reg::read) this register and get [`mcucr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`mcucr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct MCUCR_SPEC;
        impl crate::RegisterSpec for MCUCR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`mcucr::R`](R) reader structure
        impl crate::Readable for MCUCR_SPEC {}
        ///`write(|w| ..)` method takes [`mcucr::W`](W) writer structure
        impl crate::Writable for MCUCR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets MCUCR to value 0
        impl crate::Resettable for MCUCR_SPEC {}
    }
    /**MCUSR (rw) register accessor: MCU Status register

You can [`read`](crate::Reg::read) this register and get [`mcusr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`mcusr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@mcusr`] module*/
    pub type MCUSR = crate::Reg<mcusr::MCUSR_SPEC>;
    ///MCU Status register
    pub mod mcusr {
        ///Register `MCUSR` reader
        pub type R = crate::R<MCUSR_SPEC>;
        ///Register `MCUSR` writer
        pub type W = crate::W<MCUSR_SPEC>;
        ///Field `PORF` reader - Power-On Reset Flag
        pub type PORF_R = crate::BitReader;
        ///Field `PORF` writer - Power-On Reset Flag
        pub type PORF_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `EXTRF` reader - External Reset Flag
        pub type EXTRF_R = crate::BitReader;
        ///Field `EXTRF` writer - External Reset Flag
        pub type EXTRF_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `BORF` reader - Brown-out Reset Flag
        pub type BORF_R = crate::BitReader;
        ///Field `BORF` writer - Brown-out Reset Flag
        pub type BORF_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `WDRF` reader - Watchdog Reset Flag
        pub type WDRF_R = crate::BitReader;
        ///Field `WDRF` writer - Watchdog Reset Flag
        pub type WDRF_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - Power-On Reset Flag
            #[inline(always)]
            pub fn porf(&self) -> PORF_R {
                PORF_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - External Reset Flag
            #[inline(always)]
            pub fn extrf(&self) -> EXTRF_R {
                EXTRF_R::new(((self.bits >> 1) & 1) != 0)
            }
            ///Bit 2 - Brown-out Reset Flag
            #[inline(always)]
            pub fn borf(&self) -> BORF_R {
                BORF_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - Watchdog Reset Flag
            #[inline(always)]
            pub fn wdrf(&self) -> WDRF_R {
                WDRF_R::new(((self.bits >> 3) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - Power-On Reset Flag
            #[inline(always)]
            pub fn porf(&mut self) -> PORF_W<'_, MCUSR_SPEC> {
                PORF_W::new(self, 0)
            }
            ///Bit 1 - External Reset Flag
            #[inline(always)]
            pub fn extrf(&mut self) -> EXTRF_W<'_, MCUSR_SPEC> {
                EXTRF_W::new(self, 1)
            }
            ///Bit 2 - Brown-out Reset Flag
            #[inline(always)]
            pub fn borf(&mut self) -> BORF_W<'_, MCUSR_SPEC> {
                BORF_W::new(self, 2)
            }
            ///Bit 3 - Watchdog Reset Flag
            #[inline(always)]
            pub fn wdrf(&mut self) -> WDRF_W<'_, MCUSR_SPEC> {
                WDRF_W::new(self, 3)
            }
        }
        /**MCU Status register

You can [`read`](crate::Reg::read) this register and get [`mcusr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`mcusr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct MCUSR_SPEC;
        impl crate::RegisterSpec for MCUSR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`mcusr::R`](R) reader structure
        impl crate::Readable for MCUSR_SPEC {}
        ///`write(|w| ..)` method takes [`mcusr::W`](W) writer structure
        impl crate::Writable for MCUSR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets MCUSR to value 0
        impl crate::Resettable for MCUSR_SPEC {}
    }
    /**OSCCAL (rw) register accessor: Oscillator Calibration Register

You can [`read`](crate::Reg::read) this register and get [`osccal::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`osccal::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@osccal`] module*/
    pub type OSCCAL = crate::Reg<osccal::OSCCAL_SPEC>;
    ///Oscillator Calibration Register
    pub mod osccal {
        ///Register `OSCCAL` reader
        pub type R = crate::R<OSCCAL_SPEC>;
        ///Register `OSCCAL` writer
        pub type W = crate::W<OSCCAL_SPEC>;
        ///Field `OSCCAL` reader - Oscillator Calibration
        pub type OSCCAL_R = crate::FieldReader;
        ///Field `OSCCAL` writer - Oscillator Calibration
        pub type OSCCAL_W<'a, REG> = crate::FieldWriter<'a, REG, 8, u8, crate::Safe>;
        impl R {
            ///Bits 0:7 - Oscillator Calibration
            #[inline(always)]
            pub fn osccal(&self) -> OSCCAL_R {
                OSCCAL_R::new(self.bits)
            }
        }
        impl W {
            ///Bits 0:7 - Oscillator Calibration
            #[inline(always)]
            pub fn osccal(&mut self) -> OSCCAL_W<'_, OSCCAL_SPEC> {
                OSCCAL_W::new(self, 0)
            }
        }
        /**Oscillator Calibration Register

You can [`read`](crate::Reg::read) this register and get [`osccal::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`osccal::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct OSCCAL_SPEC;
        impl crate::RegisterSpec for OSCCAL_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`osccal::R`](R) reader structure
        impl crate::Readable for OSCCAL_SPEC {}
        ///`write(|w| ..)` method takes [`osccal::W`](W) writer structure
        impl crate::Writable for OSCCAL_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets OSCCAL to value 0
        impl crate::Resettable for OSCCAL_SPEC {}
    }
    /**PRR (rw) register accessor: Power Reduction Register

You can [`read`](crate::Reg::read) this register and get [`prr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`prr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@prr`] module*/
    pub type PRR = crate::Reg<prr::PRR_SPEC>;
    ///Power Reduction Register
    pub mod prr {
        ///Register `PRR` reader
        pub type R = crate::R<PRR_SPEC>;
        ///Register `PRR` writer
        pub type W = crate::W<PRR_SPEC>;
        ///Field `PRADC` reader - Power Reduction ADC
        pub type PRADC_R = crate::BitReader;
        ///Field `PRADC` writer - Power Reduction ADC
        pub type PRADC_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PRTIM0` reader - Power Reduction Timer/Counter0
        pub type PRTIM0_R = crate::BitReader;
        ///Field `PRTIM0` writer - Power Reduction Timer/Counter0
        pub type PRTIM0_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - Power Reduction ADC
            #[inline(always)]
            pub fn pradc(&self) -> PRADC_R {
                PRADC_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - Power Reduction Timer/Counter0
            #[inline(always)]
            pub fn prtim0(&self) -> PRTIM0_R {
                PRTIM0_R::new(((self.bits >> 1) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - Power Reduction ADC
            #[inline(always)]
            pub fn pradc(&mut self) -> PRADC_W<'_, PRR_SPEC> {
                PRADC_W::new(self, 0)
            }
            ///Bit 1 - Power Reduction Timer/Counter0
            #[inline(always)]
            pub fn prtim0(&mut self) -> PRTIM0_W<'_, PRR_SPEC> {
                PRTIM0_W::new(self, 1)
            }
        }
        /**Power Reduction Register

You can [`read`](crate::Reg::read) this register and get [`prr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`prr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct PRR_SPEC;
        impl crate::RegisterSpec for PRR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`prr::R`](R) reader structure
        impl crate::Readable for PRR_SPEC {}
        ///`write(|w| ..)` method takes [`prr::W`](W) writer structure
        impl crate::Writable for PRR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets PRR to value 0
        impl crate::Resettable for PRR_SPEC {}
    }
    /**SPL (rw) register accessor: Stack Pointer Low Byte

You can [`read`](crate::Reg::read) this register and get [`spl::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`spl::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@spl`] module*/
    pub type SPL = crate::Reg<spl::SPL_SPEC>;
    ///Stack Pointer Low Byte
    pub mod spl {
        ///Register `SPL` reader
        pub type R = crate::R<SPL_SPEC>;
        ///Register `SPL` writer
        pub type W = crate::W<SPL_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**Stack Pointer Low Byte

You can [`read`](crate::Reg::read) this register and get [`spl::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`spl::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct SPL_SPEC;
        impl crate::RegisterSpec for SPL_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`spl::R`](R) reader structure
        impl crate::Readable for SPL_SPEC {}
        ///`write(|w| ..)` method takes [`spl::W`](W) writer structure
        impl crate::Writable for SPL_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets SPL to value 0
        impl crate::Resettable for SPL_SPEC {}
    }
    /**SPMCSR (rw) register accessor: Store Program Memory Control and Status Register

You can [`read`](crate::Reg::read) this register and get [`spmcsr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`spmcsr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@spmcsr`] module*/
    pub type SPMCSR = crate::Reg<spmcsr::SPMCSR_SPEC>;
    ///Store Program Memory Control and Status Register
    pub mod spmcsr {
        ///Register `SPMCSR` reader
        pub type R = crate::R<SPMCSR_SPEC>;
        ///Register `SPMCSR` writer
        pub type W = crate::W<SPMCSR_SPEC>;
        ///Field `SPMEN` reader - Store program Memory Enable
        pub type SPMEN_R = crate::BitReader;
        ///Field `SPMEN` writer - Store program Memory Enable
        pub type SPMEN_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PGERS` reader - Page Erase
        pub type PGERS_R = crate::BitReader;
        ///Field `PGERS` writer - Page Erase
        pub type PGERS_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PGWRT` reader - Page Write
        pub type PGWRT_R = crate::BitReader;
        ///Field `PGWRT` writer - Page Write
        pub type PGWRT_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `RFLB` reader - Read Fuse and Lock Bits
        pub type RFLB_R = crate::BitReader;
        ///Field `RFLB` writer - Read Fuse and Lock Bits
        pub type RFLB_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `CTPB` reader - Clear Temporary Page Buffer
        pub type CTPB_R = crate::BitReader;
        ///Field `CTPB` writer - Clear Temporary Page Buffer
        pub type CTPB_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - Store program Memory Enable
            #[inline(always)]
            pub fn spmen(&self) -> SPMEN_R {
                SPMEN_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - Page Erase
            #[inline(always)]
            pub fn pgers(&self) -> PGERS_R {
                PGERS_R::new(((self.bits >> 1) & 1) != 0)
            }
            ///Bit 2 - Page Write
            #[inline(always)]
            pub fn pgwrt(&self) -> PGWRT_R {
                PGWRT_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - Read Fuse and Lock Bits
            #[inline(always)]
            pub fn rflb(&self) -> RFLB_R {
                RFLB_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - Clear Temporary Page Buffer
            #[inline(always)]
            pub fn ctpb(&self) -> CTPB_R {
                CTPB_R::new(((self.bits >> 4) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - Store program Memory Enable
            #[inline(always)]
            pub fn spmen(&mut self) -> SPMEN_W<'_, SPMCSR_SPEC> {
                SPMEN_W::new(self, 0)
            }
            ///Bit 1 - Page Erase
            #[inline(always)]
            pub fn pgers(&mut self) -> PGERS_W<'_, SPMCSR_SPEC> {
                PGERS_W::new(self, 1)
            }
            ///Bit 2 - Page Write
            #[inline(always)]
            pub fn pgwrt(&mut self) -> PGWRT_W<'_, SPMCSR_SPEC> {
                PGWRT_W::new(self, 2)
            }
            ///Bit 3 - Read Fuse and Lock Bits
            #[inline(always)]
            pub fn rflb(&mut self) -> RFLB_W<'_, SPMCSR_SPEC> {
                RFLB_W::new(self, 3)
            }
            ///Bit 4 - Clear Temporary Page Buffer
            #[inline(always)]
            pub fn ctpb(&mut self) -> CTPB_W<'_, SPMCSR_SPEC> {
                CTPB_W::new(self, 4)
            }
        }
        /**Store Program Memory Control and Status Register

You can [`read`](crate::Reg::read) this register and get [`spmcsr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`spmcsr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct SPMCSR_SPEC;
        impl crate::RegisterSpec for SPMCSR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`spmcsr::R`](R) reader structure
        impl crate::Readable for SPMCSR_SPEC {}
        ///`write(|w| ..)` method takes [`spmcsr::W`](W) writer structure
        impl crate::Writable for SPMCSR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets SPMCSR to value 0
        impl crate::Resettable for SPMCSR_SPEC {}
    }
}
///EEPROM
pub type EEPROM = crate::Periph<eeprom::RegisterBlock, 0x3c>;
impl core::fmt::Debug for EEPROM {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("EEPROM").finish()
    }
}
///EEPROM
pub mod eeprom {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        eecr: EECR,
        eedr: EEDR,
        eear: EEAR,
    }
    impl RegisterBlock {
        ///0x00 - EEPROM Control Register
        #[inline(always)]
        pub const fn eecr(&self) -> &EECR {
            &self.eecr
        }
        ///0x01 - EEPROM Data Register
        #[inline(always)]
        pub const fn eedr(&self) -> &EEDR {
            &self.eedr
        }
        ///0x02 - EEPROM Read/Write Access
        #[inline(always)]
        pub const fn eear(&self) -> &EEAR {
            &self.eear
        }
    }
    /**EEAR (rw) register accessor: EEPROM Read/Write Access

You can [`read`](crate::Reg::read) this register and get [`eear::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`eear::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@eear`] module*/
    pub type EEAR = crate::Reg<eear::EEAR_SPEC>;
    ///EEPROM Read/Write Access
    pub mod eear {
        ///Register `EEAR` reader
        pub type R = crate::R<EEAR_SPEC>;
        ///Register `EEAR` writer
        pub type W = crate::W<EEAR_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**EEPROM Read/Write Access

You can [`read`](crate::Reg::read) this register and get [`eear::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`eear::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct EEAR_SPEC;
        impl crate::RegisterSpec for EEAR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`eear::R`](R) reader structure
        impl crate::Readable for EEAR_SPEC {}
        ///`write(|w| ..)` method takes [`eear::W`](W) writer structure
        impl crate::Writable for EEAR_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets EEAR to value 0
        impl crate::Resettable for EEAR_SPEC {}
    }
    /**EECR (rw) register accessor: EEPROM Control Register

You can [`read`](crate::Reg::read) this register and get [`eecr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`eecr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@eecr`] module*/
    pub type EECR = crate::Reg<eecr::EECR_SPEC>;
    ///EEPROM Control Register
    pub mod eecr {
        ///Register `EECR` reader
        pub type R = crate::R<EECR_SPEC>;
        ///Register `EECR` writer
        pub type W = crate::W<EECR_SPEC>;
        ///Field `EERE` reader - EEPROM Read Enable
        pub type EERE_R = crate::BitReader;
        ///Field `EERE` writer - EEPROM Read Enable
        pub type EERE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `EEWE` reader - EEPROM Write Enable
        pub type EEWE_R = crate::BitReader;
        ///Field `EEWE` writer - EEPROM Write Enable
        pub type EEWE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `EEMWE` reader - EEPROM Master Write Enable
        pub type EEMWE_R = crate::BitReader;
        ///Field `EEMWE` writer - EEPROM Master Write Enable
        pub type EEMWE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `EERIE` reader - EEProm Ready Interrupt Enable
        pub type EERIE_R = crate::BitReader;
        ///Field `EERIE` writer - EEProm Ready Interrupt Enable
        pub type EERIE_W<'a, REG> = crate::BitWriter<'a, REG>;
        /**No Description.

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum EEPM_A {
            ///0: Atomic (erase and write in one operation)
            ATOMIC = 0,
            ///1: Erase only
            ERASE = 1,
            ///2: Write only
            WRITE = 2,
        }
        impl From<EEPM_A> for u8 {
            #[inline(always)]
            fn from(variant: EEPM_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for EEPM_A {
            type Ux = u8;
        }
        impl crate::IsEnum for EEPM_A {}
        ///Field `EEPM` reader - No Description.
        pub type EEPM_R = crate::FieldReader<EEPM_A>;
        impl EEPM_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> Option<EEPM_A> {
                match self.bits {
                    0 => Some(EEPM_A::ATOMIC),
                    1 => Some(EEPM_A::ERASE),
                    2 => Some(EEPM_A::WRITE),
                    _ => None,
                }
            }
            ///Atomic (erase and write in one operation)
            #[inline(always)]
            pub fn is_atomic(&self) -> bool {
                *self == EEPM_A::ATOMIC
            }
            ///Erase only
            #[inline(always)]
            pub fn is_erase(&self) -> bool {
                *self == EEPM_A::ERASE
            }
            ///Write only
            #[inline(always)]
            pub fn is_write(&self) -> bool {
                *self == EEPM_A::WRITE
            }
        }
        ///Field `EEPM` writer - No Description.
        pub type EEPM_W<'a, REG> = crate::FieldWriter<'a, REG, 2, EEPM_A>;
        impl<'a, REG> EEPM_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Atomic (erase and write in one operation)
            #[inline(always)]
            pub fn atomic(self) -> &'a mut crate::W<REG> {
                self.variant(EEPM_A::ATOMIC)
            }
            ///Erase only
            #[inline(always)]
            pub fn erase(self) -> &'a mut crate::W<REG> {
                self.variant(EEPM_A::ERASE)
            }
            ///Write only
            #[inline(always)]
            pub fn write(self) -> &'a mut crate::W<REG> {
                self.variant(EEPM_A::WRITE)
            }
        }
        impl R {
            ///Bit 0 - EEPROM Read Enable
            #[inline(always)]
            pub fn eere(&self) -> EERE_R {
                EERE_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - EEPROM Write Enable
            #[inline(always)]
            pub fn eewe(&self) -> EEWE_R {
                EEWE_R::new(((self.bits >> 1) & 1) != 0)
            }
            ///Bit 2 - EEPROM Master Write Enable
            #[inline(always)]
            pub fn eemwe(&self) -> EEMWE_R {
                EEMWE_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - EEProm Ready Interrupt Enable
            #[inline(always)]
            pub fn eerie(&self) -> EERIE_R {
                EERIE_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bits 4:5 - No Description.
            #[inline(always)]
            pub fn eepm(&self) -> EEPM_R {
                EEPM_R::new((self.bits >> 4) & 3)
            }
        }
        impl W {
            ///Bit 0 - EEPROM Read Enable
            #[inline(always)]
            pub fn eere(&mut self) -> EERE_W<'_, EECR_SPEC> {
                EERE_W::new(self, 0)
            }
            ///Bit 1 - EEPROM Write Enable
            #[inline(always)]
            pub fn eewe(&mut self) -> EEWE_W<'_, EECR_SPEC> {
                EEWE_W::new(self, 1)
            }
            ///Bit 2 - EEPROM Master Write Enable
            #[inline(always)]
            pub fn eemwe(&mut self) -> EEMWE_W<'_, EECR_SPEC> {
                EEMWE_W::new(self, 2)
            }
            ///Bit 3 - EEProm Ready Interrupt Enable
            #[inline(always)]
            pub fn eerie(&mut self) -> EERIE_W<'_, EECR_SPEC> {
                EERIE_W::new(self, 3)
            }
            ///Bits 4:5 - No Description.
            #[inline(always)]
            pub fn eepm(&mut self) -> EEPM_W<'_, EECR_SPEC> {
                EEPM_W::new(self, 4)
            }
        }
        /**EEPROM Control Register

You can [`read`](crate::Reg::read) this register and get [`eecr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`eecr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct EECR_SPEC;
        impl crate::RegisterSpec for EECR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`eecr::R`](R) reader structure
        impl crate::Readable for EECR_SPEC {}
        ///`write(|w| ..)` method takes [`eecr::W`](W) writer structure
        impl crate::Writable for EECR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets EECR to value 0
        impl crate::Resettable for EECR_SPEC {}
    }
    /**EEDR (rw) register accessor: EEPROM Data Register

You can [`read`](crate::Reg::read) this register and get [`eedr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`eedr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@eedr`] module*/
    pub type EEDR = crate::Reg<eedr::EEDR_SPEC>;
    ///EEPROM Data Register
    pub mod eedr {
        ///Register `EEDR` reader
        pub type R = crate::R<EEDR_SPEC>;
        ///Register `EEDR` writer
        pub type W = crate::W<EEDR_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**EEPROM Data Register

You can [`read`](crate::Reg::read) this register and get [`eedr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`eedr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct EEDR_SPEC;
        impl crate::RegisterSpec for EEDR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`eedr::R`](R) reader structure
        impl crate::Readable for EEDR_SPEC {}
        ///`write(|w| ..)` method takes [`eedr::W`](W) writer structure
        impl crate::Writable for EEDR_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets EEDR to value 0
        impl crate::Resettable for EEDR_SPEC {}
    }
}
///External Interrupts
pub type EXINT = crate::Periph<exint::RegisterBlock, 0x35>;
impl core::fmt::Debug for EXINT {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("EXINT").finish()
    }
}
///External Interrupts
pub mod exint {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        pcmsk: PCMSK,
        _reserved1: [u8; 0x1f],
        mcucr: MCUCR,
        _reserved2: [u8; 0x04],
        gifr: GIFR,
        gimsk: GIMSK,
    }
    impl RegisterBlock {
        ///0x00 - Pin Change Enable Mask
        #[inline(always)]
        pub const fn pcmsk(&self) -> &PCMSK {
            &self.pcmsk
        }
        ///0x20 - MCU Control Register
        #[inline(always)]
        pub const fn mcucr(&self) -> &MCUCR {
            &self.mcucr
        }
        ///0x25 - General Interrupt Flag register
        #[inline(always)]
        pub const fn gifr(&self) -> &GIFR {
            &self.gifr
        }
        ///0x26 - General Interrupt Mask Register
        #[inline(always)]
        pub const fn gimsk(&self) -> &GIMSK {
            &self.gimsk
        }
    }
    /**GIFR (rw) register accessor: General Interrupt Flag register

You can [`read`](crate::Reg::read) this register and get [`gifr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`gifr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@gifr`] module*/
    pub type GIFR = crate::Reg<gifr::GIFR_SPEC>;
    ///General Interrupt Flag register
    pub mod gifr {
        ///Register `GIFR` reader
        pub type R = crate::R<GIFR_SPEC>;
        ///Register `GIFR` writer
        pub type W = crate::W<GIFR_SPEC>;
        ///Field `PCIF` reader - Pin Change Interrupt Flag
        pub type PCIF_R = crate::BitReader;
        ///Field `PCIF` writer - Pin Change Interrupt Flag
        pub type PCIF_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `INTF0` reader - External Interrupt Flag 0
        pub type INTF0_R = crate::BitReader;
        ///Field `INTF0` writer - External Interrupt Flag 0
        pub type INTF0_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 5 - Pin Change Interrupt Flag
            #[inline(always)]
            pub fn pcif(&self) -> PCIF_R {
                PCIF_R::new(((self.bits >> 5) & 1) != 0)
            }
            ///Bit 6 - External Interrupt Flag 0
            #[inline(always)]
            pub fn intf0(&self) -> INTF0_R {
                INTF0_R::new(((self.bits >> 6) & 1) != 0)
            }
        }
        impl W {
            ///Bit 5 - Pin Change Interrupt Flag
            #[inline(always)]
            pub fn pcif(&mut self) -> PCIF_W<'_, GIFR_SPEC> {
                PCIF_W::new(self, 5)
            }
            ///Bit 6 - External Interrupt Flag 0
            #[inline(always)]
            pub fn intf0(&mut self) -> INTF0_W<'_, GIFR_SPEC> {
                INTF0_W::new(self, 6)
            }
        }
        /**General Interrupt Flag register

You can [`read`](crate::Reg::read) this register and get [`gifr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`gifr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct GIFR_SPEC;
        impl crate::RegisterSpec for GIFR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`gifr::R`](R) reader structure
        impl crate::Readable for GIFR_SPEC {}
        ///`write(|w| ..)` method takes [`gifr::W`](W) writer structure
        impl crate::Writable for GIFR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets GIFR to value 0
        impl crate::Resettable for GIFR_SPEC {}
    }
    /**GIMSK (rw) register accessor: General Interrupt Mask Register

You can [`read`](crate::Reg::read) this register and get [`gimsk::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`gimsk::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@gimsk`] module*/
    pub type GIMSK = crate::Reg<gimsk::GIMSK_SPEC>;
    ///General Interrupt Mask Register
    pub mod gimsk {
        ///Register `GIMSK` reader
        pub type R = crate::R<GIMSK_SPEC>;
        ///Register `GIMSK` writer
        pub type W = crate::W<GIMSK_SPEC>;
        ///Field `PCIE` reader - Pin Change Interrupt Enable
        pub type PCIE_R = crate::BitReader;
        ///Field `PCIE` writer - Pin Change Interrupt Enable
        pub type PCIE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `INT0` reader - External Interrupt Request 0 Enable
        pub type INT0_R = crate::BitReader;
        ///Field `INT0` writer - External Interrupt Request 0 Enable
        pub type INT0_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 5 - Pin Change Interrupt Enable
            #[inline(always)]
            pub fn pcie(&self) -> PCIE_R {
                PCIE_R::new(((self.bits >> 5) & 1) != 0)
            }
            ///Bit 6 - External Interrupt Request 0 Enable
            #[inline(always)]
            pub fn int0(&self) -> INT0_R {
                INT0_R::new(((self.bits >> 6) & 1) != 0)
            }
        }
        impl W {
            ///Bit 5 - Pin Change Interrupt Enable
            #[inline(always)]
            pub fn pcie(&mut self) -> PCIE_W<'_, GIMSK_SPEC> {
                PCIE_W::new(self, 5)
            }
            ///Bit 6 - External Interrupt Request 0 Enable
            #[inline(always)]
            pub fn int0(&mut self) -> INT0_W<'_, GIMSK_SPEC> {
                INT0_W::new(self, 6)
            }
        }
        /**General Interrupt Mask Register

You can [`read`](crate::Reg::read) this register and get [`gimsk::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`gimsk::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct GIMSK_SPEC;
        impl crate::RegisterSpec for GIMSK_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`gimsk::R`](R) reader structure
        impl crate::Readable for GIMSK_SPEC {}
        ///`write(|w| ..)` method takes [`gimsk::W`](W) writer structure
        impl crate::Writable for GIMSK_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets GIMSK to value 0
        impl crate::Resettable for GIMSK_SPEC {}
    }
    /**MCUCR (rw) register accessor: MCU Control Register

You can [`read`](crate::Reg::read) this register and get [`mcucr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`mcucr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@mcucr`] module*/
    pub type MCUCR = crate::Reg<mcucr::MCUCR_SPEC>;
    ///MCU Control Register
    pub mod mcucr {
        ///Register `MCUCR` reader
        pub type R = crate::R<MCUCR_SPEC>;
        ///Register `MCUCR` writer
        pub type W = crate::W<MCUCR_SPEC>;
        /**Interrupt Sense Control 0 bits

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum ISC0_A {
            ///0: The low level of INTx generates an interrupt request
            LOW = 0,
            ///1: Any logical change on INTx generates an interrupt request
            TOGGLE = 1,
            ///2: The falling edge of INTx generates an interrupt request
            FALLING = 2,
            ///3: The rising edge of INTx generates an interrupt request
            RISING = 3,
        }
        impl From<ISC0_A> for u8 {
            #[inline(always)]
            fn from(variant: ISC0_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for ISC0_A {
            type Ux = u8;
        }
        impl crate::IsEnum for ISC0_A {}
        ///Field `ISC0` reader - Interrupt Sense Control 0 bits
        pub type ISC0_R = crate::FieldReader<ISC0_A>;
        impl ISC0_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> ISC0_A {
                match self.bits {
                    0 => ISC0_A::LOW,
                    1 => ISC0_A::TOGGLE,
                    2 => ISC0_A::FALLING,
                    3 => ISC0_A::RISING,
                    _ => unreachable!(),
                }
            }
            ///The low level of INTx generates an interrupt request
            #[inline(always)]
            pub fn is_low(&self) -> bool {
                *self == ISC0_A::LOW
            }
            ///Any logical change on INTx generates an interrupt request
            #[inline(always)]
            pub fn is_toggle(&self) -> bool {
                *self == ISC0_A::TOGGLE
            }
            ///The falling edge of INTx generates an interrupt request
            #[inline(always)]
            pub fn is_falling(&self) -> bool {
                *self == ISC0_A::FALLING
            }
            ///The rising edge of INTx generates an interrupt request
            #[inline(always)]
            pub fn is_rising(&self) -> bool {
                *self == ISC0_A::RISING
            }
        }
        ///Field `ISC0` writer - Interrupt Sense Control 0 bits
        pub type ISC0_W<'a, REG> = crate::FieldWriter<'a, REG, 2, ISC0_A, crate::Safe>;
        impl<'a, REG> ISC0_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///The low level of INTx generates an interrupt request
            #[inline(always)]
            pub fn low(self) -> &'a mut crate::W<REG> {
                self.variant(ISC0_A::LOW)
            }
            ///Any logical change on INTx generates an interrupt request
            #[inline(always)]
            pub fn toggle(self) -> &'a mut crate::W<REG> {
                self.variant(ISC0_A::TOGGLE)
            }
            ///The falling edge of INTx generates an interrupt request
            #[inline(always)]
            pub fn falling(self) -> &'a mut crate::W<REG> {
                self.variant(ISC0_A::FALLING)
            }
            ///The rising edge of INTx generates an interrupt request
            #[inline(always)]
            pub fn rising(self) -> &'a mut crate::W<REG> {
                self.variant(ISC0_A::RISING)
            }
        }
        impl R {
            ///Bits 0:1 - Interrupt Sense Control 0 bits
            #[inline(always)]
            pub fn isc0(&self) -> ISC0_R {
                ISC0_R::new(self.bits & 3)
            }
        }
        impl W {
            ///Bits 0:1 - Interrupt Sense Control 0 bits
            #[inline(always)]
            pub fn isc0(&mut self) -> ISC0_W<'_, MCUCR_SPEC> {
                ISC0_W::new(self, 0)
            }
        }
        /**MCU Control Register

You can [`read`](crate::Reg::read) this register and get [`mcucr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`mcucr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct MCUCR_SPEC;
        impl crate::RegisterSpec for MCUCR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`mcucr::R`](R) reader structure
        impl crate::Readable for MCUCR_SPEC {}
        ///`write(|w| ..)` method takes [`mcucr::W`](W) writer structure
        impl crate::Writable for MCUCR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets MCUCR to value 0
        impl crate::Resettable for MCUCR_SPEC {}
    }
    /**PCMSK (rw) register accessor: Pin Change Enable Mask

You can [`read`](crate::Reg::read) this register and get [`pcmsk::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`pcmsk::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@pcmsk`] module*/
    pub type PCMSK = crate::Reg<pcmsk::PCMSK_SPEC>;
    ///Pin Change Enable Mask
    pub mod pcmsk {
        ///Register `PCMSK` reader
        pub type R = crate::R<PCMSK_SPEC>;
        ///Register `PCMSK` writer
        pub type W = crate::W<PCMSK_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**Pin Change Enable Mask

You can [`read`](crate::Reg::read) this register and get [`pcmsk::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`pcmsk::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct PCMSK_SPEC;
        impl crate::RegisterSpec for PCMSK_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`pcmsk::R`](R) reader structure
        impl crate::Readable for PCMSK_SPEC {}
        ///`write(|w| ..)` method takes [`pcmsk::W`](W) writer structure
        impl crate::Writable for PCMSK_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets PCMSK to value 0
        impl crate::Resettable for PCMSK_SPEC {}
    }
}
///Fuses
pub type FUSE = crate::Periph<fuse::RegisterBlock, 0>;
impl core::fmt::Debug for FUSE {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("FUSE").finish()
    }
}
///Fuses
pub mod fuse {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        low: LOW,
        high: HIGH,
    }
    impl RegisterBlock {
        ///0x00 - No Description.
        #[inline(always)]
        pub const fn low(&self) -> &LOW {
            &self.low
        }
        ///0x01 - No Description.
        #[inline(always)]
        pub const fn high(&self) -> &HIGH {
            &self.high
        }
    }
    /**HIGH (rw) register accessor: No Description.

You can [`read`](crate::Reg::read) this register and get [`high::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`high::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@high`] module*/
    pub type HIGH = crate::Reg<high::HIGH_SPEC>;
    ///No Description.
    pub mod high {
        ///Register `HIGH` reader
        pub type R = crate::R<HIGH_SPEC>;
        ///Register `HIGH` writer
        pub type W = crate::W<HIGH_SPEC>;
        ///Field `RSTDISBL` reader - Reset Disabled (Enable PB5 as i/o pin)
        pub type RSTDISBL_R = crate::BitReader;
        ///Field `RSTDISBL` writer - Reset Disabled (Enable PB5 as i/o pin)
        pub type RSTDISBL_W<'a, REG> = crate::BitWriter<'a, REG>;
        /**Enable BOD and select level

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum BODLEVEL_A {
            ///0: Brown-out detection at VCC=4.3 V
            _4V3 = 0,
            ///1: Brown-out detection at VCC=2.7 V
            _2V7 = 1,
            ///2: Brown-out detection at VCC=1.8 V
            _1V8 = 2,
            ///3: Brown-out detection disabled
            DISABLED = 3,
        }
        impl From<BODLEVEL_A> for u8 {
            #[inline(always)]
            fn from(variant: BODLEVEL_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for BODLEVEL_A {
            type Ux = u8;
        }
        impl crate::IsEnum for BODLEVEL_A {}
        ///Field `BODLEVEL` reader - Enable BOD and select level
        pub type BODLEVEL_R = crate::FieldReader<BODLEVEL_A>;
        impl BODLEVEL_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> BODLEVEL_A {
                match self.bits {
                    0 => BODLEVEL_A::_4V3,
                    1 => BODLEVEL_A::_2V7,
                    2 => BODLEVEL_A::_1V8,
                    3 => BODLEVEL_A::DISABLED,
                    _ => unreachable!(),
                }
            }
            ///Brown-out detection at VCC=4.3 V
            #[inline(always)]
            pub fn is_4v3(&self) -> bool {
                *self == BODLEVEL_A::_4V3
            }
            ///Brown-out detection at VCC=2.7 V
            #[inline(always)]
            pub fn is_2v7(&self) -> bool {
                *self == BODLEVEL_A::_2V7
            }
            ///Brown-out detection at VCC=1.8 V
            #[inline(always)]
            pub fn is_1v8(&self) -> bool {
                *self == BODLEVEL_A::_1V8
            }
            ///Brown-out detection disabled
            #[inline(always)]
            pub fn is_disabled(&self) -> bool {
                *self == BODLEVEL_A::DISABLED
            }
        }
        ///Field `BODLEVEL` writer - Enable BOD and select level
        pub type BODLEVEL_W<'a, REG> = crate::FieldWriter<
            'a,
            REG,
            2,
            BODLEVEL_A,
            crate::Safe,
        >;
        impl<'a, REG> BODLEVEL_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Brown-out detection at VCC=4.3 V
            #[inline(always)]
            pub fn _4v3(self) -> &'a mut crate::W<REG> {
                self.variant(BODLEVEL_A::_4V3)
            }
            ///Brown-out detection at VCC=2.7 V
            #[inline(always)]
            pub fn _2v7(self) -> &'a mut crate::W<REG> {
                self.variant(BODLEVEL_A::_2V7)
            }
            ///Brown-out detection at VCC=1.8 V
            #[inline(always)]
            pub fn _1v8(self) -> &'a mut crate::W<REG> {
                self.variant(BODLEVEL_A::_1V8)
            }
            ///Brown-out detection disabled
            #[inline(always)]
            pub fn disabled(self) -> &'a mut crate::W<REG> {
                self.variant(BODLEVEL_A::DISABLED)
            }
        }
        ///Field `DWEN` reader - Debug Wire enable
        pub type DWEN_R = crate::BitReader;
        ///Field `DWEN` writer - Debug Wire enable
        pub type DWEN_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `SELFPRGEN` reader - Self Programming enable
        pub type SELFPRGEN_R = crate::BitReader;
        ///Field `SELFPRGEN` writer - Self Programming enable
        pub type SELFPRGEN_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - Reset Disabled (Enable PB5 as i/o pin)
            #[inline(always)]
            pub fn rstdisbl(&self) -> RSTDISBL_R {
                RSTDISBL_R::new((self.bits & 1) != 0)
            }
            ///Bits 1:2 - Enable BOD and select level
            #[inline(always)]
            pub fn bodlevel(&self) -> BODLEVEL_R {
                BODLEVEL_R::new((self.bits >> 1) & 3)
            }
            ///Bit 3 - Debug Wire enable
            #[inline(always)]
            pub fn dwen(&self) -> DWEN_R {
                DWEN_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - Self Programming enable
            #[inline(always)]
            pub fn selfprgen(&self) -> SELFPRGEN_R {
                SELFPRGEN_R::new(((self.bits >> 4) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - Reset Disabled (Enable PB5 as i/o pin)
            #[inline(always)]
            pub fn rstdisbl(&mut self) -> RSTDISBL_W<'_, HIGH_SPEC> {
                RSTDISBL_W::new(self, 0)
            }
            ///Bits 1:2 - Enable BOD and select level
            #[inline(always)]
            pub fn bodlevel(&mut self) -> BODLEVEL_W<'_, HIGH_SPEC> {
                BODLEVEL_W::new(self, 1)
            }
            ///Bit 3 - Debug Wire enable
            #[inline(always)]
            pub fn dwen(&mut self) -> DWEN_W<'_, HIGH_SPEC> {
                DWEN_W::new(self, 3)
            }
            ///Bit 4 - Self Programming enable
            #[inline(always)]
            pub fn selfprgen(&mut self) -> SELFPRGEN_W<'_, HIGH_SPEC> {
                SELFPRGEN_W::new(self, 4)
            }
        }
        /**No Description.

You can [`read`](crate::Reg::read) this register and get [`high::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`high::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct HIGH_SPEC;
        impl crate::RegisterSpec for HIGH_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`high::R`](R) reader structure
        impl crate::Readable for HIGH_SPEC {}
        ///`write(|w| ..)` method takes [`high::W`](W) writer structure
        impl crate::Writable for HIGH_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets HIGH to value 0
        impl crate::Resettable for HIGH_SPEC {}
    }
    /**LOW (rw) register accessor: No Description.

You can [`read`](crate::Reg::read) this register and get [`low::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`low::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@low`] module*/
    pub type LOW = crate::Reg<low::LOW_SPEC>;
    ///No Description.
    pub mod low {
        ///Register `LOW` reader
        pub type R = crate::R<LOW_SPEC>;
        ///Register `LOW` writer
        pub type W = crate::W<LOW_SPEC>;
        /**Select Clock Source

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum SUT_CKSEL_A {
            ///0: Ext. Clock; Start-up time: 14 CK + 0 ms
            EXTCLK_14CK_0MS = 0,
            ///1: Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 0 ms
            INTRCOSC_4MHZ8_14CK_0MS = 1,
            ///2: Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 0 ms
            INTRCOSC_9MHZ6_14CK_0MS = 2,
            ///3: Int. RC Osc. 128 kHz; Start-up time: 14 CK + 0 ms
            INTRCOSC_128KHZ_14CK_0MS = 3,
            ///4: Ext. Clock; Start-up time: 14 CK + 4 ms
            EXTCLK_14CK_4MS = 4,
            ///5: Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 4 ms
            INTRCOSC_4MHZ8_14CK_4MS = 5,
            ///6: Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 4 ms
            INTRCOSC_9MHZ6_14CK_4MS = 6,
            ///7: Int. RC Osc. 128 kHz; Start-up time: 14 CK + 4 ms
            INTRCOSC_128KHZ_14CK_4MS = 7,
            ///8: Ext. Clock; Start-up time: 14 CK + 64 ms
            EXTCLK_14CK_64MS = 8,
            ///9: Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 64 ms
            INTRCOSC_4MHZ8_14CK_64MS = 9,
            ///10: Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 64 ms
            INTRCOSC_9MHZ6_14CK_64MS = 10,
            ///11: Int. RC Osc. 128 kHz; Start-up time: 14 CK + 64 ms
            INTRCOSC_128KHZ_14CK_64MS = 11,
        }
        impl From<SUT_CKSEL_A> for u8 {
            #[inline(always)]
            fn from(variant: SUT_CKSEL_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for SUT_CKSEL_A {
            type Ux = u8;
        }
        impl crate::IsEnum for SUT_CKSEL_A {}
        ///Field `SUT_CKSEL` reader - Select Clock Source
        pub type SUT_CKSEL_R = crate::FieldReader<SUT_CKSEL_A>;
        impl SUT_CKSEL_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> Option<SUT_CKSEL_A> {
                match self.bits {
                    0 => Some(SUT_CKSEL_A::EXTCLK_14CK_0MS),
                    1 => Some(SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_0MS),
                    2 => Some(SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_0MS),
                    3 => Some(SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_0MS),
                    4 => Some(SUT_CKSEL_A::EXTCLK_14CK_4MS),
                    5 => Some(SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_4MS),
                    6 => Some(SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_4MS),
                    7 => Some(SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_4MS),
                    8 => Some(SUT_CKSEL_A::EXTCLK_14CK_64MS),
                    9 => Some(SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_64MS),
                    10 => Some(SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_64MS),
                    11 => Some(SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_64MS),
                    _ => None,
                }
            }
            ///Ext. Clock; Start-up time: 14 CK + 0 ms
            #[inline(always)]
            pub fn is_extclk_14ck_0ms(&self) -> bool {
                *self == SUT_CKSEL_A::EXTCLK_14CK_0MS
            }
            ///Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 0 ms
            #[inline(always)]
            pub fn is_intrcosc_4mhz8_14ck_0ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_0MS
            }
            ///Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 0 ms
            #[inline(always)]
            pub fn is_intrcosc_9mhz6_14ck_0ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_0MS
            }
            ///Int. RC Osc. 128 kHz; Start-up time: 14 CK + 0 ms
            #[inline(always)]
            pub fn is_intrcosc_128khz_14ck_0ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_0MS
            }
            ///Ext. Clock; Start-up time: 14 CK + 4 ms
            #[inline(always)]
            pub fn is_extclk_14ck_4ms(&self) -> bool {
                *self == SUT_CKSEL_A::EXTCLK_14CK_4MS
            }
            ///Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 4 ms
            #[inline(always)]
            pub fn is_intrcosc_4mhz8_14ck_4ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_4MS
            }
            ///Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 4 ms
            #[inline(always)]
            pub fn is_intrcosc_9mhz6_14ck_4ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_4MS
            }
            ///Int. RC Osc. 128 kHz; Start-up time: 14 CK + 4 ms
            #[inline(always)]
            pub fn is_intrcosc_128khz_14ck_4ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_4MS
            }
            ///Ext. Clock; Start-up time: 14 CK + 64 ms
            #[inline(always)]
            pub fn is_extclk_14ck_64ms(&self) -> bool {
                *self == SUT_CKSEL_A::EXTCLK_14CK_64MS
            }
            ///Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 64 ms
            #[inline(always)]
            pub fn is_intrcosc_4mhz8_14ck_64ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_64MS
            }
            ///Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 64 ms
            #[inline(always)]
            pub fn is_intrcosc_9mhz6_14ck_64ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_64MS
            }
            ///Int. RC Osc. 128 kHz; Start-up time: 14 CK + 64 ms
            #[inline(always)]
            pub fn is_intrcosc_128khz_14ck_64ms(&self) -> bool {
                *self == SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_64MS
            }
        }
        ///Field `SUT_CKSEL` writer - Select Clock Source
        pub type SUT_CKSEL_W<'a, REG> = crate::FieldWriter<'a, REG, 4, SUT_CKSEL_A>;
        impl<'a, REG> SUT_CKSEL_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Ext. Clock; Start-up time: 14 CK + 0 ms
            #[inline(always)]
            pub fn extclk_14ck_0ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::EXTCLK_14CK_0MS)
            }
            ///Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 0 ms
            #[inline(always)]
            pub fn intrcosc_4mhz8_14ck_0ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_0MS)
            }
            ///Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 0 ms
            #[inline(always)]
            pub fn intrcosc_9mhz6_14ck_0ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_0MS)
            }
            ///Int. RC Osc. 128 kHz; Start-up time: 14 CK + 0 ms
            #[inline(always)]
            pub fn intrcosc_128khz_14ck_0ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_0MS)
            }
            ///Ext. Clock; Start-up time: 14 CK + 4 ms
            #[inline(always)]
            pub fn extclk_14ck_4ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::EXTCLK_14CK_4MS)
            }
            ///Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 4 ms
            #[inline(always)]
            pub fn intrcosc_4mhz8_14ck_4ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_4MS)
            }
            ///Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 4 ms
            #[inline(always)]
            pub fn intrcosc_9mhz6_14ck_4ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_4MS)
            }
            ///Int. RC Osc. 128 kHz; Start-up time: 14 CK + 4 ms
            #[inline(always)]
            pub fn intrcosc_128khz_14ck_4ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_4MS)
            }
            ///Ext. Clock; Start-up time: 14 CK + 64 ms
            #[inline(always)]
            pub fn extclk_14ck_64ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::EXTCLK_14CK_64MS)
            }
            ///Int. RC Osc. 4.8 MHz; Start-up time: 14 CK + 64 ms
            #[inline(always)]
            pub fn intrcosc_4mhz8_14ck_64ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_4MHZ8_14CK_64MS)
            }
            ///Int. RC Osc. 9.6 MHz; Start-up time: 14 CK + 64 ms
            #[inline(always)]
            pub fn intrcosc_9mhz6_14ck_64ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_9MHZ6_14CK_64MS)
            }
            ///Int. RC Osc. 128 kHz; Start-up time: 14 CK + 64 ms
            #[inline(always)]
            pub fn intrcosc_128khz_14ck_64ms(self) -> &'a mut crate::W<REG> {
                self.variant(SUT_CKSEL_A::INTRCOSC_128KHZ_14CK_64MS)
            }
        }
        ///Field `CKDIV8` reader - Divide clock by 8 internally
        pub type CKDIV8_R = crate::BitReader;
        ///Field `CKDIV8` writer - Divide clock by 8 internally
        pub type CKDIV8_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `WDTON` reader - Watch-dog Timer always on
        pub type WDTON_R = crate::BitReader;
        ///Field `WDTON` writer - Watch-dog Timer always on
        pub type WDTON_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `EESAVE` reader - Preserve EEPROM through the Chip Erase cycle
        pub type EESAVE_R = crate::BitReader;
        ///Field `EESAVE` writer - Preserve EEPROM through the Chip Erase cycle
        pub type EESAVE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `SPIEN` reader - Serial program downloading (SPI) enabled
        pub type SPIEN_R = crate::BitReader;
        ///Field `SPIEN` writer - Serial program downloading (SPI) enabled
        pub type SPIEN_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bits 0:3 - Select Clock Source
            #[inline(always)]
            pub fn sut_cksel(&self) -> SUT_CKSEL_R {
                SUT_CKSEL_R::new(self.bits & 0x0f)
            }
            ///Bit 4 - Divide clock by 8 internally
            #[inline(always)]
            pub fn ckdiv8(&self) -> CKDIV8_R {
                CKDIV8_R::new(((self.bits >> 4) & 1) != 0)
            }
            ///Bit 5 - Watch-dog Timer always on
            #[inline(always)]
            pub fn wdton(&self) -> WDTON_R {
                WDTON_R::new(((self.bits >> 5) & 1) != 0)
            }
            ///Bit 6 - Preserve EEPROM through the Chip Erase cycle
            #[inline(always)]
            pub fn eesave(&self) -> EESAVE_R {
                EESAVE_R::new(((self.bits >> 6) & 1) != 0)
            }
            ///Bit 7 - Serial program downloading (SPI) enabled
            #[inline(always)]
            pub fn spien(&self) -> SPIEN_R {
                SPIEN_R::new(((self.bits >> 7) & 1) != 0)
            }
        }
        impl W {
            ///Bits 0:3 - Select Clock Source
            #[inline(always)]
            pub fn sut_cksel(&mut self) -> SUT_CKSEL_W<'_, LOW_SPEC> {
                SUT_CKSEL_W::new(self, 0)
            }
            ///Bit 4 - Divide clock by 8 internally
            #[inline(always)]
            pub fn ckdiv8(&mut self) -> CKDIV8_W<'_, LOW_SPEC> {
                CKDIV8_W::new(self, 4)
            }
            ///Bit 5 - Watch-dog Timer always on
            #[inline(always)]
            pub fn wdton(&mut self) -> WDTON_W<'_, LOW_SPEC> {
                WDTON_W::new(self, 5)
            }
            ///Bit 6 - Preserve EEPROM through the Chip Erase cycle
            #[inline(always)]
            pub fn eesave(&mut self) -> EESAVE_W<'_, LOW_SPEC> {
                EESAVE_W::new(self, 6)
            }
            ///Bit 7 - Serial program downloading (SPI) enabled
            #[inline(always)]
            pub fn spien(&mut self) -> SPIEN_W<'_, LOW_SPEC> {
                SPIEN_W::new(self, 7)
            }
        }
        /**No Description.

You can [`read`](crate::Reg::read) this register and get [`low::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`low::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct LOW_SPEC;
        impl crate::RegisterSpec for LOW_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`low::R`](R) reader structure
        impl crate::Readable for LOW_SPEC {}
        ///`write(|w| ..)` method takes [`low::W`](W) writer structure
        impl crate::Writable for LOW_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets LOW to value 0
        impl crate::Resettable for LOW_SPEC {}
    }
}
///Lockbits
pub type LOCKBIT = crate::Periph<lockbit::RegisterBlock, 0>;
impl core::fmt::Debug for LOCKBIT {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("LOCKBIT").finish()
    }
}
///Lockbits
pub mod lockbit {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        lockbit: LOCKBIT,
    }
    impl RegisterBlock {
        ///0x00 - No Description.
        #[inline(always)]
        pub const fn lockbit(&self) -> &LOCKBIT {
            &self.lockbit
        }
    }
    /**LOCKBIT (rw) register accessor: No Description.

You can [`read`](crate::Reg::read) this register and get [`lockbit::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`lockbit::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@lockbit`] module*/
    pub type LOCKBIT = crate::Reg<lockbit::LOCKBIT_SPEC>;
    ///No Description.
    pub mod lockbit {
        ///Register `LOCKBIT` reader
        pub type R = crate::R<LOCKBIT_SPEC>;
        ///Register `LOCKBIT` writer
        pub type W = crate::W<LOCKBIT_SPEC>;
        /**Memory Lock

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum LB_A {
            ///0: Further programming and verification disabled
            PROG_VER_DISABLED = 0,
            ///2: Further programming disabled
            PROG_DISABLED = 2,
            ///3: No memory lock features enabled
            NO_LOCK = 3,
        }
        impl From<LB_A> for u8 {
            #[inline(always)]
            fn from(variant: LB_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for LB_A {
            type Ux = u8;
        }
        impl crate::IsEnum for LB_A {}
        ///Field `LB` reader - Memory Lock
        pub type LB_R = crate::FieldReader<LB_A>;
        impl LB_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> Option<LB_A> {
                match self.bits {
                    0 => Some(LB_A::PROG_VER_DISABLED),
                    2 => Some(LB_A::PROG_DISABLED),
                    3 => Some(LB_A::NO_LOCK),
                    _ => None,
                }
            }
            ///Further programming and verification disabled
            #[inline(always)]
            pub fn is_prog_ver_disabled(&self) -> bool {
                *self == LB_A::PROG_VER_DISABLED
            }
            ///Further programming disabled
            #[inline(always)]
            pub fn is_prog_disabled(&self) -> bool {
                *self == LB_A::PROG_DISABLED
            }
            ///No memory lock features enabled
            #[inline(always)]
            pub fn is_no_lock(&self) -> bool {
                *self == LB_A::NO_LOCK
            }
        }
        ///Field `LB` writer - Memory Lock
        pub type LB_W<'a, REG> = crate::FieldWriter<'a, REG, 2, LB_A>;
        impl<'a, REG> LB_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Further programming and verification disabled
            #[inline(always)]
            pub fn prog_ver_disabled(self) -> &'a mut crate::W<REG> {
                self.variant(LB_A::PROG_VER_DISABLED)
            }
            ///Further programming disabled
            #[inline(always)]
            pub fn prog_disabled(self) -> &'a mut crate::W<REG> {
                self.variant(LB_A::PROG_DISABLED)
            }
            ///No memory lock features enabled
            #[inline(always)]
            pub fn no_lock(self) -> &'a mut crate::W<REG> {
                self.variant(LB_A::NO_LOCK)
            }
        }
        impl R {
            ///Bits 0:1 - Memory Lock
            #[inline(always)]
            pub fn lb(&self) -> LB_R {
                LB_R::new(self.bits & 3)
            }
        }
        impl W {
            ///Bits 0:1 - Memory Lock
            #[inline(always)]
            pub fn lb(&mut self) -> LB_W<'_, LOCKBIT_SPEC> {
                LB_W::new(self, 0)
            }
        }
        /**No Description.

You can [`read`](crate::Reg::read) this register and get [`lockbit::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`lockbit::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct LOCKBIT_SPEC;
        impl crate::RegisterSpec for LOCKBIT_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`lockbit::R`](R) reader structure
        impl crate::Readable for LOCKBIT_SPEC {}
        ///`write(|w| ..)` method takes [`lockbit::W`](W) writer structure
        impl crate::Writable for LOCKBIT_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets LOCKBIT to value 0
        impl crate::Resettable for LOCKBIT_SPEC {}
    }
}
///I/O Port
pub type PORTB = crate::Periph<portb::RegisterBlock, 0x36>;
impl core::fmt::Debug for PORTB {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("PORTB").finish()
    }
}
///I/O Port
pub mod portb {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        pinb: PINB,
        ddrb: DDRB,
        portb: PORTB,
    }
    impl RegisterBlock {
        ///0x00 - Input Pins, Port B
        #[inline(always)]
        pub const fn pinb(&self) -> &PINB {
            &self.pinb
        }
        ///0x01 - Data Direction Register, Port B
        #[inline(always)]
        pub const fn ddrb(&self) -> &DDRB {
            &self.ddrb
        }
        ///0x02 - Data Register, Port B
        #[inline(always)]
        pub const fn portb(&self) -> &PORTB {
            &self.portb
        }
    }
    /**DDRB (rw) register accessor: Data Direction Register, Port B

You can [`read`](crate::Reg::read) this register and get [`ddrb::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`ddrb::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@ddrb`] module*/
    pub type DDRB = crate::Reg<ddrb::DDRB_SPEC>;
    ///Data Direction Register, Port B
    pub mod ddrb {
        ///Register `DDRB` reader
        pub type R = crate::R<DDRB_SPEC>;
        ///Register `DDRB` writer
        pub type W = crate::W<DDRB_SPEC>;
        ///Field `PB0` reader - Pin B0
        pub type PB0_R = crate::BitReader;
        ///Field `PB0` writer - Pin B0
        pub type PB0_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB1` reader - Pin B1
        pub type PB1_R = crate::BitReader;
        ///Field `PB1` writer - Pin B1
        pub type PB1_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB2` reader - Pin B2
        pub type PB2_R = crate::BitReader;
        ///Field `PB2` writer - Pin B2
        pub type PB2_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB3` reader - Pin B3
        pub type PB3_R = crate::BitReader;
        ///Field `PB3` writer - Pin B3
        pub type PB3_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB4` reader - Pin B4
        pub type PB4_R = crate::BitReader;
        ///Field `PB4` writer - Pin B4
        pub type PB4_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB5` reader - Pin B5
        pub type PB5_R = crate::BitReader;
        ///Field `PB5` writer - Pin B5
        pub type PB5_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - Pin B0
            #[inline(always)]
            pub fn pb0(&self) -> PB0_R {
                PB0_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - Pin B1
            #[inline(always)]
            pub fn pb1(&self) -> PB1_R {
                PB1_R::new(((self.bits >> 1) & 1) != 0)
            }
            ///Bit 2 - Pin B2
            #[inline(always)]
            pub fn pb2(&self) -> PB2_R {
                PB2_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - Pin B3
            #[inline(always)]
            pub fn pb3(&self) -> PB3_R {
                PB3_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - Pin B4
            #[inline(always)]
            pub fn pb4(&self) -> PB4_R {
                PB4_R::new(((self.bits >> 4) & 1) != 0)
            }
            ///Bit 5 - Pin B5
            #[inline(always)]
            pub fn pb5(&self) -> PB5_R {
                PB5_R::new(((self.bits >> 5) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - Pin B0
            #[inline(always)]
            pub fn pb0(&mut self) -> PB0_W<'_, DDRB_SPEC> {
                PB0_W::new(self, 0)
            }
            ///Bit 1 - Pin B1
            #[inline(always)]
            pub fn pb1(&mut self) -> PB1_W<'_, DDRB_SPEC> {
                PB1_W::new(self, 1)
            }
            ///Bit 2 - Pin B2
            #[inline(always)]
            pub fn pb2(&mut self) -> PB2_W<'_, DDRB_SPEC> {
                PB2_W::new(self, 2)
            }
            ///Bit 3 - Pin B3
            #[inline(always)]
            pub fn pb3(&mut self) -> PB3_W<'_, DDRB_SPEC> {
                PB3_W::new(self, 3)
            }
            ///Bit 4 - Pin B4
            #[inline(always)]
            pub fn pb4(&mut self) -> PB4_W<'_, DDRB_SPEC> {
                PB4_W::new(self, 4)
            }
            ///Bit 5 - Pin B5
            #[inline(always)]
            pub fn pb5(&mut self) -> PB5_W<'_, DDRB_SPEC> {
                PB5_W::new(self, 5)
            }
        }
        /**Data Direction Register, Port B

You can [`read`](crate::Reg::read) this register and get [`ddrb::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`ddrb::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct DDRB_SPEC;
        impl crate::RegisterSpec for DDRB_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`ddrb::R`](R) reader structure
        impl crate::Readable for DDRB_SPEC {}
        ///`write(|w| ..)` method takes [`ddrb::W`](W) writer structure
        impl crate::Writable for DDRB_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets DDRB to value 0
        impl crate::Resettable for DDRB_SPEC {}
    }
    /**PINB (rw) register accessor: Input Pins, Port B

You can [`read`](crate::Reg::read) this register and get [`pinb::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`pinb::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@pinb`] module*/
    pub type PINB = crate::Reg<pinb::PINB_SPEC>;
    ///Input Pins, Port B
    pub mod pinb {
        ///Register `PINB` reader
        pub type R = crate::R<PINB_SPEC>;
        ///Register `PINB` writer
        pub type W = crate::W<PINB_SPEC>;
        ///Field `PB0` reader - Pin B0
        pub type PB0_R = crate::BitReader;
        ///Field `PB0` writer - Pin B0
        pub type PB0_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB1` reader - Pin B1
        pub type PB1_R = crate::BitReader;
        ///Field `PB1` writer - Pin B1
        pub type PB1_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB2` reader - Pin B2
        pub type PB2_R = crate::BitReader;
        ///Field `PB2` writer - Pin B2
        pub type PB2_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB3` reader - Pin B3
        pub type PB3_R = crate::BitReader;
        ///Field `PB3` writer - Pin B3
        pub type PB3_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB4` reader - Pin B4
        pub type PB4_R = crate::BitReader;
        ///Field `PB4` writer - Pin B4
        pub type PB4_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB5` reader - Pin B5
        pub type PB5_R = crate::BitReader;
        ///Field `PB5` writer - Pin B5
        pub type PB5_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - Pin B0
            #[inline(always)]
            pub fn pb0(&self) -> PB0_R {
                PB0_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - Pin B1
            #[inline(always)]
            pub fn pb1(&self) -> PB1_R {
                PB1_R::new(((self.bits >> 1) & 1) != 0)
            }
            ///Bit 2 - Pin B2
            #[inline(always)]
            pub fn pb2(&self) -> PB2_R {
                PB2_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - Pin B3
            #[inline(always)]
            pub fn pb3(&self) -> PB3_R {
                PB3_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - Pin B4
            #[inline(always)]
            pub fn pb4(&self) -> PB4_R {
                PB4_R::new(((self.bits >> 4) & 1) != 0)
            }
            ///Bit 5 - Pin B5
            #[inline(always)]
            pub fn pb5(&self) -> PB5_R {
                PB5_R::new(((self.bits >> 5) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - Pin B0
            #[inline(always)]
            pub fn pb0(&mut self) -> PB0_W<'_, PINB_SPEC> {
                PB0_W::new(self, 0)
            }
            ///Bit 1 - Pin B1
            #[inline(always)]
            pub fn pb1(&mut self) -> PB1_W<'_, PINB_SPEC> {
                PB1_W::new(self, 1)
            }
            ///Bit 2 - Pin B2
            #[inline(always)]
            pub fn pb2(&mut self) -> PB2_W<'_, PINB_SPEC> {
                PB2_W::new(self, 2)
            }
            ///Bit 3 - Pin B3
            #[inline(always)]
            pub fn pb3(&mut self) -> PB3_W<'_, PINB_SPEC> {
                PB3_W::new(self, 3)
            }
            ///Bit 4 - Pin B4
            #[inline(always)]
            pub fn pb4(&mut self) -> PB4_W<'_, PINB_SPEC> {
                PB4_W::new(self, 4)
            }
            ///Bit 5 - Pin B5
            #[inline(always)]
            pub fn pb5(&mut self) -> PB5_W<'_, PINB_SPEC> {
                PB5_W::new(self, 5)
            }
        }
        /**Input Pins, Port B

You can [`read`](crate::Reg::read) this register and get [`pinb::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`pinb::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct PINB_SPEC;
        impl crate::RegisterSpec for PINB_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`pinb::R`](R) reader structure
        impl crate::Readable for PINB_SPEC {}
        ///`write(|w| ..)` method takes [`pinb::W`](W) writer structure
        impl crate::Writable for PINB_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets PINB to value 0
        impl crate::Resettable for PINB_SPEC {}
    }
    /**PORTB (rw) register accessor: Data Register, Port B

You can [`read`](crate::Reg::read) this register and get [`portb::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`portb::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@portb`] module*/
    pub type PORTB = crate::Reg<portb::PORTB_SPEC>;
    ///Data Register, Port B
    pub mod portb {
        ///Register `PORTB` reader
        pub type R = crate::R<PORTB_SPEC>;
        ///Register `PORTB` writer
        pub type W = crate::W<PORTB_SPEC>;
        ///Field `PB0` reader - Pin B0
        pub type PB0_R = crate::BitReader;
        ///Field `PB0` writer - Pin B0
        pub type PB0_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB1` reader - Pin B1
        pub type PB1_R = crate::BitReader;
        ///Field `PB1` writer - Pin B1
        pub type PB1_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB2` reader - Pin B2
        pub type PB2_R = crate::BitReader;
        ///Field `PB2` writer - Pin B2
        pub type PB2_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB3` reader - Pin B3
        pub type PB3_R = crate::BitReader;
        ///Field `PB3` writer - Pin B3
        pub type PB3_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB4` reader - Pin B4
        pub type PB4_R = crate::BitReader;
        ///Field `PB4` writer - Pin B4
        pub type PB4_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `PB5` reader - Pin B5
        pub type PB5_R = crate::BitReader;
        ///Field `PB5` writer - Pin B5
        pub type PB5_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - Pin B0
            #[inline(always)]
            pub fn pb0(&self) -> PB0_R {
                PB0_R::new((self.bits & 1) != 0)
            }
            ///Bit 1 - Pin B1
            #[inline(always)]
            pub fn pb1(&self) -> PB1_R {
                PB1_R::new(((self.bits >> 1) & 1) != 0)
            }
            ///Bit 2 - Pin B2
            #[inline(always)]
            pub fn pb2(&self) -> PB2_R {
                PB2_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - Pin B3
            #[inline(always)]
            pub fn pb3(&self) -> PB3_R {
                PB3_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - Pin B4
            #[inline(always)]
            pub fn pb4(&self) -> PB4_R {
                PB4_R::new(((self.bits >> 4) & 1) != 0)
            }
            ///Bit 5 - Pin B5
            #[inline(always)]
            pub fn pb5(&self) -> PB5_R {
                PB5_R::new(((self.bits >> 5) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - Pin B0
            #[inline(always)]
            pub fn pb0(&mut self) -> PB0_W<'_, PORTB_SPEC> {
                PB0_W::new(self, 0)
            }
            ///Bit 1 - Pin B1
            #[inline(always)]
            pub fn pb1(&mut self) -> PB1_W<'_, PORTB_SPEC> {
                PB1_W::new(self, 1)
            }
            ///Bit 2 - Pin B2
            #[inline(always)]
            pub fn pb2(&mut self) -> PB2_W<'_, PORTB_SPEC> {
                PB2_W::new(self, 2)
            }
            ///Bit 3 - Pin B3
            #[inline(always)]
            pub fn pb3(&mut self) -> PB3_W<'_, PORTB_SPEC> {
                PB3_W::new(self, 3)
            }
            ///Bit 4 - Pin B4
            #[inline(always)]
            pub fn pb4(&mut self) -> PB4_W<'_, PORTB_SPEC> {
                PB4_W::new(self, 4)
            }
            ///Bit 5 - Pin B5
            #[inline(always)]
            pub fn pb5(&mut self) -> PB5_W<'_, PORTB_SPEC> {
                PB5_W::new(self, 5)
            }
        }
        /**Data Register, Port B

You can [`read`](crate::Reg::read) this register and get [`portb::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`portb::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct PORTB_SPEC;
        impl crate::RegisterSpec for PORTB_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`portb::R`](R) reader structure
        impl crate::Readable for PORTB_SPEC {}
        ///`write(|w| ..)` method takes [`portb::W`](W) writer structure
        impl crate::Writable for PORTB_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets PORTB to value 0
        impl crate::Resettable for PORTB_SPEC {}
    }
}
///Timer/Counter0, 8-bit, PWM
pub type TC0 = crate::Periph<tc0::RegisterBlock, 0x48>;
impl core::fmt::Debug for TC0 {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("TC0").finish()
    }
}
///Timer/Counter0, 8-bit, PWM
pub mod tc0 {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        gtccr: GTCCR,
        ocr0b: OCR0B,
        _reserved2: [u8; 0x05],
        tccr0a: TCCR0A,
        _reserved3: [u8; 0x02],
        tcnt0: TCNT0,
        tccr0b: TCCR0B,
        _reserved5: [u8; 0x02],
        ocr0a: OCR0A,
        _reserved6: [u8; 0x01],
        tifr0: TIFR0,
        timsk0: TIMSK0,
    }
    impl RegisterBlock {
        ///0x00 - General Timer Conuter Register
        #[inline(always)]
        pub const fn gtccr(&self) -> &GTCCR {
            &self.gtccr
        }
        ///0x01 - Output Compare Register B
        #[inline(always)]
        pub const fn ocr0b(&self) -> &OCR0B {
            &self.ocr0b
        }
        ///0x07 - Timer/Counter Control Register A
        #[inline(always)]
        pub const fn tccr0a(&self) -> &TCCR0A {
            &self.tccr0a
        }
        ///0x0a - Timer/Counter0
        #[inline(always)]
        pub const fn tcnt0(&self) -> &TCNT0 {
            &self.tcnt0
        }
        ///0x0b - Timer/Counter Control Register B
        #[inline(always)]
        pub const fn tccr0b(&self) -> &TCCR0B {
            &self.tccr0b
        }
        ///0x0e - Output Compare Register A
        #[inline(always)]
        pub const fn ocr0a(&self) -> &OCR0A {
            &self.ocr0a
        }
        ///0x10 - Timer/Counter0 Interrupt Flag register
        #[inline(always)]
        pub const fn tifr0(&self) -> &TIFR0 {
            &self.tifr0
        }
        ///0x11 - Timer/Counter0 Interrupt Mask Register
        #[inline(always)]
        pub const fn timsk0(&self) -> &TIMSK0 {
            &self.timsk0
        }
    }
    /**GTCCR (rw) register accessor: General Timer Conuter Register

You can [`read`](crate::Reg::read) this register and get [`gtccr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`gtccr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@gtccr`] module*/
    pub type GTCCR = crate::Reg<gtccr::GTCCR_SPEC>;
    ///General Timer Conuter Register
    pub mod gtccr {
        ///Register `GTCCR` reader
        pub type R = crate::R<GTCCR_SPEC>;
        ///Register `GTCCR` writer
        pub type W = crate::W<GTCCR_SPEC>;
        ///Field `PSR10` reader - Prescaler Reset Timer/Counter0
        pub type PSR10_R = crate::BitReader;
        ///Field `PSR10` writer - Prescaler Reset Timer/Counter0
        pub type PSR10_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `TSM` reader - Timer/Counter Synchronization Mode
        pub type TSM_R = crate::BitReader;
        ///Field `TSM` writer - Timer/Counter Synchronization Mode
        pub type TSM_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 0 - Prescaler Reset Timer/Counter0
            #[inline(always)]
            pub fn psr10(&self) -> PSR10_R {
                PSR10_R::new((self.bits & 1) != 0)
            }
            ///Bit 7 - Timer/Counter Synchronization Mode
            #[inline(always)]
            pub fn tsm(&self) -> TSM_R {
                TSM_R::new(((self.bits >> 7) & 1) != 0)
            }
        }
        impl W {
            ///Bit 0 - Prescaler Reset Timer/Counter0
            #[inline(always)]
            pub fn psr10(&mut self) -> PSR10_W<'_, GTCCR_SPEC> {
                PSR10_W::new(self, 0)
            }
            ///Bit 7 - Timer/Counter Synchronization Mode
            #[inline(always)]
            pub fn tsm(&mut self) -> TSM_W<'_, GTCCR_SPEC> {
                TSM_W::new(self, 7)
            }
        }
        /**General Timer Conuter Register

You can [`read`](crate::Reg::read) this register and get [`gtccr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`gtccr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct GTCCR_SPEC;
        impl crate::RegisterSpec for GTCCR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`gtccr::R`](R) reader structure
        impl crate::Readable for GTCCR_SPEC {}
        ///`write(|w| ..)` method takes [`gtccr::W`](W) writer structure
        impl crate::Writable for GTCCR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets GTCCR to value 0
        impl crate::Resettable for GTCCR_SPEC {}
    }
    /**OCR0A (rw) register accessor: Output Compare Register A

You can [`read`](crate::Reg::read) this register and get [`ocr0a::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`ocr0a::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@ocr0a`] module*/
    pub type OCR0A = crate::Reg<ocr0a::OCR0A_SPEC>;
    ///Output Compare Register A
    pub mod ocr0a {
        ///Register `OCR0A` reader
        pub type R = crate::R<OCR0A_SPEC>;
        ///Register `OCR0A` writer
        pub type W = crate::W<OCR0A_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**Output Compare Register A

You can [`read`](crate::Reg::read) this register and get [`ocr0a::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`ocr0a::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct OCR0A_SPEC;
        impl crate::RegisterSpec for OCR0A_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`ocr0a::R`](R) reader structure
        impl crate::Readable for OCR0A_SPEC {}
        ///`write(|w| ..)` method takes [`ocr0a::W`](W) writer structure
        impl crate::Writable for OCR0A_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets OCR0A to value 0
        impl crate::Resettable for OCR0A_SPEC {}
    }
    /**OCR0B (rw) register accessor: Output Compare Register B

You can [`read`](crate::Reg::read) this register and get [`ocr0b::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`ocr0b::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@ocr0b`] module*/
    pub type OCR0B = crate::Reg<ocr0b::OCR0B_SPEC>;
    ///Output Compare Register B
    pub mod ocr0b {
        ///Register `OCR0B` reader
        pub type R = crate::R<OCR0B_SPEC>;
        ///Register `OCR0B` writer
        pub type W = crate::W<OCR0B_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**Output Compare Register B

You can [`read`](crate::Reg::read) this register and get [`ocr0b::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`ocr0b::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct OCR0B_SPEC;
        impl crate::RegisterSpec for OCR0B_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`ocr0b::R`](R) reader structure
        impl crate::Readable for OCR0B_SPEC {}
        ///`write(|w| ..)` method takes [`ocr0b::W`](W) writer structure
        impl crate::Writable for OCR0B_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets OCR0B to value 0
        impl crate::Resettable for OCR0B_SPEC {}
    }
    /**TCCR0A (rw) register accessor: Timer/Counter Control Register A

You can [`read`](crate::Reg::read) this register and get [`tccr0a::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`tccr0a::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@tccr0a`] module*/
    pub type TCCR0A = crate::Reg<tccr0a::TCCR0A_SPEC>;
    ///Timer/Counter Control Register A
    pub mod tccr0a {
        ///Register `TCCR0A` reader
        pub type R = crate::R<TCCR0A_SPEC>;
        ///Register `TCCR0A` writer
        pub type W = crate::W<TCCR0A_SPEC>;
        /**Waveform Generation Mode

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum WGM0_A {
            ///0: Normal, Top: `0xff`, Update: *Immediate*, Flag: *MAX*
            NORMAL_TOP = 0,
            ///1: Phase Correct PWM, Top: `0xff`, Update: *TOP*, Flag: *BOTTOM*
            PWM_PHASE = 1,
            ///2: CTC, Top: *OCRA*, Update: *Immediate*, Flag: *MAX*
            CTC = 2,
            ///3: Fast PWM, Top: `0xff`, Update: *BOTTOM*, Flag: *TOP*
            PWM_FAST = 3,
        }
        impl From<WGM0_A> for u8 {
            #[inline(always)]
            fn from(variant: WGM0_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for WGM0_A {
            type Ux = u8;
        }
        impl crate::IsEnum for WGM0_A {}
        ///Field `WGM0` reader - Waveform Generation Mode
        pub type WGM0_R = crate::FieldReader<WGM0_A>;
        impl WGM0_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> WGM0_A {
                match self.bits {
                    0 => WGM0_A::NORMAL_TOP,
                    1 => WGM0_A::PWM_PHASE,
                    2 => WGM0_A::CTC,
                    3 => WGM0_A::PWM_FAST,
                    _ => unreachable!(),
                }
            }
            ///Normal, Top: `0xff`, Update: *Immediate*, Flag: *MAX*
            #[inline(always)]
            pub fn is_normal_top(&self) -> bool {
                *self == WGM0_A::NORMAL_TOP
            }
            ///Phase Correct PWM, Top: `0xff`, Update: *TOP*, Flag: *BOTTOM*
            #[inline(always)]
            pub fn is_pwm_phase(&self) -> bool {
                *self == WGM0_A::PWM_PHASE
            }
            ///CTC, Top: *OCRA*, Update: *Immediate*, Flag: *MAX*
            #[inline(always)]
            pub fn is_ctc(&self) -> bool {
                *self == WGM0_A::CTC
            }
            ///Fast PWM, Top: `0xff`, Update: *BOTTOM*, Flag: *TOP*
            #[inline(always)]
            pub fn is_pwm_fast(&self) -> bool {
                *self == WGM0_A::PWM_FAST
            }
        }
        ///Field `WGM0` writer - Waveform Generation Mode
        pub type WGM0_W<'a, REG> = crate::FieldWriter<'a, REG, 2, WGM0_A, crate::Safe>;
        impl<'a, REG> WGM0_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Normal, Top: `0xff`, Update: *Immediate*, Flag: *MAX*
            #[inline(always)]
            pub fn normal_top(self) -> &'a mut crate::W<REG> {
                self.variant(WGM0_A::NORMAL_TOP)
            }
            ///Phase Correct PWM, Top: `0xff`, Update: *TOP*, Flag: *BOTTOM*
            #[inline(always)]
            pub fn pwm_phase(self) -> &'a mut crate::W<REG> {
                self.variant(WGM0_A::PWM_PHASE)
            }
            ///CTC, Top: *OCRA*, Update: *Immediate*, Flag: *MAX*
            #[inline(always)]
            pub fn ctc(self) -> &'a mut crate::W<REG> {
                self.variant(WGM0_A::CTC)
            }
            ///Fast PWM, Top: `0xff`, Update: *BOTTOM*, Flag: *TOP*
            #[inline(always)]
            pub fn pwm_fast(self) -> &'a mut crate::W<REG> {
                self.variant(WGM0_A::PWM_FAST)
            }
        }
        /**Compare Output B Mode

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum COM0B_A {
            ///0: Normal port operation, OCix disconnected
            DISCONNECTED = 0,
            ///1: Toggle OCix on Compare Match (Might depend on WGM)
            MATCH_TOGGLE = 1,
            ///2: Clear OCix on Compare Match (If PWM is enabled, OCix is set at BOTTOM)
            MATCH_CLEAR = 2,
            ///3: Set OCix on Compare Match (If PWM is enabled, OCix is cleared at BOTTOM)
            MATCH_SET = 3,
        }
        impl From<COM0B_A> for u8 {
            #[inline(always)]
            fn from(variant: COM0B_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for COM0B_A {
            type Ux = u8;
        }
        impl crate::IsEnum for COM0B_A {}
        ///Field `COM0B` reader - Compare Output B Mode
        pub type COM0B_R = crate::FieldReader<COM0B_A>;
        impl COM0B_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> COM0B_A {
                match self.bits {
                    0 => COM0B_A::DISCONNECTED,
                    1 => COM0B_A::MATCH_TOGGLE,
                    2 => COM0B_A::MATCH_CLEAR,
                    3 => COM0B_A::MATCH_SET,
                    _ => unreachable!(),
                }
            }
            ///Normal port operation, OCix disconnected
            #[inline(always)]
            pub fn is_disconnected(&self) -> bool {
                *self == COM0B_A::DISCONNECTED
            }
            ///Toggle OCix on Compare Match (Might depend on WGM)
            #[inline(always)]
            pub fn is_match_toggle(&self) -> bool {
                *self == COM0B_A::MATCH_TOGGLE
            }
            ///Clear OCix on Compare Match (If PWM is enabled, OCix is set at BOTTOM)
            #[inline(always)]
            pub fn is_match_clear(&self) -> bool {
                *self == COM0B_A::MATCH_CLEAR
            }
            ///Set OCix on Compare Match (If PWM is enabled, OCix is cleared at BOTTOM)
            #[inline(always)]
            pub fn is_match_set(&self) -> bool {
                *self == COM0B_A::MATCH_SET
            }
        }
        ///Field `COM0B` writer - Compare Output B Mode
        pub type COM0B_W<'a, REG> = crate::FieldWriter<'a, REG, 2, COM0B_A, crate::Safe>;
        impl<'a, REG> COM0B_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///Normal port operation, OCix disconnected
            #[inline(always)]
            pub fn disconnected(self) -> &'a mut crate::W<REG> {
                self.variant(COM0B_A::DISCONNECTED)
            }
            ///Toggle OCix on Compare Match (Might depend on WGM)
            #[inline(always)]
            pub fn match_toggle(self) -> &'a mut crate::W<REG> {
                self.variant(COM0B_A::MATCH_TOGGLE)
            }
            ///Clear OCix on Compare Match (If PWM is enabled, OCix is set at BOTTOM)
            #[inline(always)]
            pub fn match_clear(self) -> &'a mut crate::W<REG> {
                self.variant(COM0B_A::MATCH_CLEAR)
            }
            ///Set OCix on Compare Match (If PWM is enabled, OCix is cleared at BOTTOM)
            #[inline(always)]
            pub fn match_set(self) -> &'a mut crate::W<REG> {
                self.variant(COM0B_A::MATCH_SET)
            }
        }
        ///Field `COM0A` reader - Compare Output A Mode
        pub use COM0B_R as COM0A_R;
        ///Field `COM0A` writer - Compare Output A Mode
        pub use COM0B_W as COM0A_W;
        impl R {
            ///Bits 0:1 - Waveform Generation Mode
            #[inline(always)]
            pub fn wgm0(&self) -> WGM0_R {
                WGM0_R::new(self.bits & 3)
            }
            ///Bits 4:5 - Compare Output B Mode
            #[inline(always)]
            pub fn com0b(&self) -> COM0B_R {
                COM0B_R::new((self.bits >> 4) & 3)
            }
            ///Bits 6:7 - Compare Output A Mode
            #[inline(always)]
            pub fn com0a(&self) -> COM0A_R {
                COM0A_R::new((self.bits >> 6) & 3)
            }
        }
        impl W {
            ///Bits 0:1 - Waveform Generation Mode
            #[inline(always)]
            pub fn wgm0(&mut self) -> WGM0_W<'_, TCCR0A_SPEC> {
                WGM0_W::new(self, 0)
            }
            ///Bits 4:5 - Compare Output B Mode
            #[inline(always)]
            pub fn com0b(&mut self) -> COM0B_W<'_, TCCR0A_SPEC> {
                COM0B_W::new(self, 4)
            }
            ///Bits 6:7 - Compare Output A Mode
            #[inline(always)]
            pub fn com0a(&mut self) -> COM0A_W<'_, TCCR0A_SPEC> {
                COM0A_W::new(self, 6)
            }
        }
        /**Timer/Counter Control Register A

You can [`read`](crate::Reg::read) this register and get [`tccr0a::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`tccr0a::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct TCCR0A_SPEC;
        impl crate::RegisterSpec for TCCR0A_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`tccr0a::R`](R) reader structure
        impl crate::Readable for TCCR0A_SPEC {}
        ///`write(|w| ..)` method takes [`tccr0a::W`](W) writer structure
        impl crate::Writable for TCCR0A_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets TCCR0A to value 0
        impl crate::Resettable for TCCR0A_SPEC {}
    }
    /**TCCR0B (rw) register accessor: Timer/Counter Control Register B

You can [`read`](crate::Reg::read) this register and get [`tccr0b::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`tccr0b::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@tccr0b`] module*/
    pub type TCCR0B = crate::Reg<tccr0b::TCCR0B_SPEC>;
    ///Timer/Counter Control Register B
    pub mod tccr0b {
        ///Register `TCCR0B` reader
        pub type R = crate::R<TCCR0B_SPEC>;
        ///Register `TCCR0B` writer
        pub type W = crate::W<TCCR0B_SPEC>;
        /**Clock Select

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum CS0_A {
            ///0: No clock source (Timer/Counter stopped)
            NO_CLOCK = 0,
            ///1: Running, No Prescaling
            DIRECT = 1,
            ///2: Running, CLK/8
            PRESCALE_8 = 2,
            ///3: Running, CLK/64
            PRESCALE_64 = 3,
            ///4: Running, CLK/256
            PRESCALE_256 = 4,
            ///5: Running, CLK/1024
            PRESCALE_1024 = 5,
            ///6: Running, ExtClk Tx Falling Edge
            EXT_FALLING = 6,
            ///7: Running, ExtClk Tx Rising Edge
            EXT_RISING = 7,
        }
        impl From<CS0_A> for u8 {
            #[inline(always)]
            fn from(variant: CS0_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for CS0_A {
            type Ux = u8;
        }
        impl crate::IsEnum for CS0_A {}
        ///Field `CS0` reader - Clock Select
        pub type CS0_R = crate::FieldReader<CS0_A>;
        impl CS0_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> CS0_A {
                match self.bits {
                    0 => CS0_A::NO_CLOCK,
                    1 => CS0_A::DIRECT,
                    2 => CS0_A::PRESCALE_8,
                    3 => CS0_A::PRESCALE_64,
                    4 => CS0_A::PRESCALE_256,
                    5 => CS0_A::PRESCALE_1024,
                    6 => CS0_A::EXT_FALLING,
                    7 => CS0_A::EXT_RISING,
                    _ => unreachable!(),
                }
            }
            ///No clock source (Timer/Counter stopped)
            #[inline(always)]
            pub fn is_no_clock(&self) -> bool {
                *self == CS0_A::NO_CLOCK
            }
            ///Running, No Prescaling
            #[inline(always)]
            pub fn is_direct(&self) -> bool {
                *self == CS0_A::DIRECT
            }
            ///Running, CLK/8
            #[inline(always)]
            pub fn is_prescale_8(&self) -> bool {
                *self == CS0_A::PRESCALE_8
            }
            ///Running, CLK/64
            #[inline(always)]
            pub fn is_prescale_64(&self) -> bool {
                *self == CS0_A::PRESCALE_64
            }
            ///Running, CLK/256
            #[inline(always)]
            pub fn is_prescale_256(&self) -> bool {
                *self == CS0_A::PRESCALE_256
            }
            ///Running, CLK/1024
            #[inline(always)]
            pub fn is_prescale_1024(&self) -> bool {
                *self == CS0_A::PRESCALE_1024
            }
            ///Running, ExtClk Tx Falling Edge
            #[inline(always)]
            pub fn is_ext_falling(&self) -> bool {
                *self == CS0_A::EXT_FALLING
            }
            ///Running, ExtClk Tx Rising Edge
            #[inline(always)]
            pub fn is_ext_rising(&self) -> bool {
                *self == CS0_A::EXT_RISING
            }
        }
        ///Field `CS0` writer - Clock Select
        pub type CS0_W<'a, REG> = crate::FieldWriter<'a, REG, 3, CS0_A, crate::Safe>;
        impl<'a, REG> CS0_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///No clock source (Timer/Counter stopped)
            #[inline(always)]
            pub fn no_clock(self) -> &'a mut crate::W<REG> {
                self.variant(CS0_A::NO_CLOCK)
            }
            ///Running, No Prescaling
            #[inline(always)]
            pub fn direct(self) -> &'a mut crate::W<REG> {
                self.variant(CS0_A::DIRECT)
            }
            ///Running, CLK/8
            #[inline(always)]
            pub fn prescale_8(self) -> &'a mut crate::W<REG> {
                self.variant(CS0_A::PRESCALE_8)
            }
            ///Running, CLK/64
            #[inline(always)]
            pub fn prescale_64(self) -> &'a mut crate::W<REG> {
                self.variant(CS0_A::PRESCALE_64)
            }
            ///Running, CLK/256
            #[inline(always)]
            pub fn prescale_256(self) -> &'a mut crate::W<REG> {
                self.variant(CS0_A::PRESCALE_256)
            }
            ///Running, CLK/1024
            #[inline(always)]
            pub fn prescale_1024(self) -> &'a mut crate::W<REG> {
                self.variant(CS0_A::PRESCALE_1024)
            }
            ///Running, ExtClk Tx Falling Edge
            #[inline(always)]
            pub fn ext_falling(self) -> &'a mut crate::W<REG> {
                self.variant(CS0_A::EXT_FALLING)
            }
            ///Running, ExtClk Tx Rising Edge
            #[inline(always)]
            pub fn ext_rising(self) -> &'a mut crate::W<REG> {
                self.variant(CS0_A::EXT_RISING)
            }
        }
        ///Field `WGM02` reader - Waveform Generation Mode High Bit (Enable Top: *OCRA* for `PWM` modes)
        pub type WGM02_R = crate::BitReader;
        ///Field `WGM02` writer - Waveform Generation Mode High Bit (Enable Top: *OCRA* for `PWM` modes)
        pub type WGM02_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `FOC0B` writer - Force Output Compare B
        pub type FOC0B_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `FOC0A` writer - Force Output Compare A
        pub type FOC0A_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bits 0:2 - Clock Select
            #[inline(always)]
            pub fn cs0(&self) -> CS0_R {
                CS0_R::new(self.bits & 7)
            }
            ///Bit 3 - Waveform Generation Mode High Bit (Enable Top: *OCRA* for `PWM` modes)
            #[inline(always)]
            pub fn wgm02(&self) -> WGM02_R {
                WGM02_R::new(((self.bits >> 3) & 1) != 0)
            }
        }
        impl W {
            ///Bits 0:2 - Clock Select
            #[inline(always)]
            pub fn cs0(&mut self) -> CS0_W<'_, TCCR0B_SPEC> {
                CS0_W::new(self, 0)
            }
            ///Bit 3 - Waveform Generation Mode High Bit (Enable Top: *OCRA* for `PWM` modes)
            #[inline(always)]
            pub fn wgm02(&mut self) -> WGM02_W<'_, TCCR0B_SPEC> {
                WGM02_W::new(self, 3)
            }
            ///Bit 6 - Force Output Compare B
            #[inline(always)]
            pub fn foc0b(&mut self) -> FOC0B_W<'_, TCCR0B_SPEC> {
                FOC0B_W::new(self, 6)
            }
            ///Bit 7 - Force Output Compare A
            #[inline(always)]
            pub fn foc0a(&mut self) -> FOC0A_W<'_, TCCR0B_SPEC> {
                FOC0A_W::new(self, 7)
            }
        }
        /**Timer/Counter Control Register B

You can [`read`](crate::Reg::read) this register and get [`tccr0b::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`tccr0b::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct TCCR0B_SPEC;
        impl crate::RegisterSpec for TCCR0B_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`tccr0b::R`](R) reader structure
        impl crate::Readable for TCCR0B_SPEC {}
        ///`write(|w| ..)` method takes [`tccr0b::W`](W) writer structure
        impl crate::Writable for TCCR0B_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets TCCR0B to value 0
        impl crate::Resettable for TCCR0B_SPEC {}
    }
    /**TCNT0 (rw) register accessor: Timer/Counter0

You can [`read`](crate::Reg::read) this register and get [`tcnt0::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`tcnt0::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@tcnt0`] module*/
    pub type TCNT0 = crate::Reg<tcnt0::TCNT0_SPEC>;
    ///Timer/Counter0
    pub mod tcnt0 {
        ///Register `TCNT0` reader
        pub type R = crate::R<TCNT0_SPEC>;
        ///Register `TCNT0` writer
        pub type W = crate::W<TCNT0_SPEC>;
        impl core::fmt::Debug for R {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(f, "{}", self.bits())
            }
        }
        impl W {}
        /**Timer/Counter0

You can [`read`](crate::Reg::read) this register and get [`tcnt0::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`tcnt0::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct TCNT0_SPEC;
        impl crate::RegisterSpec for TCNT0_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`tcnt0::R`](R) reader structure
        impl crate::Readable for TCNT0_SPEC {}
        ///`write(|w| ..)` method takes [`tcnt0::W`](W) writer structure
        impl crate::Writable for TCNT0_SPEC {
            type Safety = crate::Safe;
        }
        ///`reset()` method sets TCNT0 to value 0
        impl crate::Resettable for TCNT0_SPEC {}
    }
    /**TIFR0 (rw) register accessor: Timer/Counter0 Interrupt Flag register

You can [`read`](crate::Reg::read) this register and get [`tifr0::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`tifr0::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@tifr0`] module*/
    pub type TIFR0 = crate::Reg<tifr0::TIFR0_SPEC>;
    ///Timer/Counter0 Interrupt Flag register
    pub mod tifr0 {
        ///Register `TIFR0` reader
        pub type R = crate::R<TIFR0_SPEC>;
        ///Register `TIFR0` writer
        pub type W = crate::W<TIFR0_SPEC>;
        ///Field `TOV0` reader - Timer/Counter0 Overflow Flag
        pub type TOV0_R = crate::BitReader;
        ///Field `TOV0` writer - Timer/Counter0 Overflow Flag
        pub type TOV0_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `OCF0A` reader - Timer/Counter0 Output Compare Flag 0A
        pub type OCF0A_R = crate::BitReader;
        ///Field `OCF0A` writer - Timer/Counter0 Output Compare Flag 0A
        pub type OCF0A_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `OCF0B` reader - Timer/Counter0 Output Compare Flag 0B
        pub type OCF0B_R = crate::BitReader;
        ///Field `OCF0B` writer - Timer/Counter0 Output Compare Flag 0B
        pub type OCF0B_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 1 - Timer/Counter0 Overflow Flag
            #[inline(always)]
            pub fn tov0(&self) -> TOV0_R {
                TOV0_R::new(((self.bits >> 1) & 1) != 0)
            }
            ///Bit 2 - Timer/Counter0 Output Compare Flag 0A
            #[inline(always)]
            pub fn ocf0a(&self) -> OCF0A_R {
                OCF0A_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - Timer/Counter0 Output Compare Flag 0B
            #[inline(always)]
            pub fn ocf0b(&self) -> OCF0B_R {
                OCF0B_R::new(((self.bits >> 3) & 1) != 0)
            }
        }
        impl W {
            ///Bit 1 - Timer/Counter0 Overflow Flag
            #[inline(always)]
            pub fn tov0(&mut self) -> TOV0_W<'_, TIFR0_SPEC> {
                TOV0_W::new(self, 1)
            }
            ///Bit 2 - Timer/Counter0 Output Compare Flag 0A
            #[inline(always)]
            pub fn ocf0a(&mut self) -> OCF0A_W<'_, TIFR0_SPEC> {
                OCF0A_W::new(self, 2)
            }
            ///Bit 3 - Timer/Counter0 Output Compare Flag 0B
            #[inline(always)]
            pub fn ocf0b(&mut self) -> OCF0B_W<'_, TIFR0_SPEC> {
                OCF0B_W::new(self, 3)
            }
        }
        /**Timer/Counter0 Interrupt Flag register

You can [`read`](crate::Reg::read) this register and get [`tifr0::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`tifr0::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct TIFR0_SPEC;
        impl crate::RegisterSpec for TIFR0_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`tifr0::R`](R) reader structure
        impl crate::Readable for TIFR0_SPEC {}
        ///`write(|w| ..)` method takes [`tifr0::W`](W) writer structure
        impl crate::Writable for TIFR0_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets TIFR0 to value 0
        impl crate::Resettable for TIFR0_SPEC {}
    }
    /**TIMSK0 (rw) register accessor: Timer/Counter0 Interrupt Mask Register

You can [`read`](crate::Reg::read) this register and get [`timsk0::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`timsk0::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@timsk0`] module*/
    pub type TIMSK0 = crate::Reg<timsk0::TIMSK0_SPEC>;
    ///Timer/Counter0 Interrupt Mask Register
    pub mod timsk0 {
        ///Register `TIMSK0` reader
        pub type R = crate::R<TIMSK0_SPEC>;
        ///Register `TIMSK0` writer
        pub type W = crate::W<TIMSK0_SPEC>;
        ///Field `TOIE0` reader - Timer/Counter0 Overflow Interrupt Enable
        pub type TOIE0_R = crate::BitReader;
        ///Field `TOIE0` writer - Timer/Counter0 Overflow Interrupt Enable
        pub type TOIE0_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `OCIE0A` reader - Timer/Counter0 Output Compare Match A Interrupt Enable
        pub type OCIE0A_R = crate::BitReader;
        ///Field `OCIE0A` writer - Timer/Counter0 Output Compare Match A Interrupt Enable
        pub type OCIE0A_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `OCIE0B` reader - Timer/Counter0 Output Compare Match B Interrupt Enable
        pub type OCIE0B_R = crate::BitReader;
        ///Field `OCIE0B` writer - Timer/Counter0 Output Compare Match B Interrupt Enable
        pub type OCIE0B_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bit 1 - Timer/Counter0 Overflow Interrupt Enable
            #[inline(always)]
            pub fn toie0(&self) -> TOIE0_R {
                TOIE0_R::new(((self.bits >> 1) & 1) != 0)
            }
            ///Bit 2 - Timer/Counter0 Output Compare Match A Interrupt Enable
            #[inline(always)]
            pub fn ocie0a(&self) -> OCIE0A_R {
                OCIE0A_R::new(((self.bits >> 2) & 1) != 0)
            }
            ///Bit 3 - Timer/Counter0 Output Compare Match B Interrupt Enable
            #[inline(always)]
            pub fn ocie0b(&self) -> OCIE0B_R {
                OCIE0B_R::new(((self.bits >> 3) & 1) != 0)
            }
        }
        impl W {
            ///Bit 1 - Timer/Counter0 Overflow Interrupt Enable
            #[inline(always)]
            pub fn toie0(&mut self) -> TOIE0_W<'_, TIMSK0_SPEC> {
                TOIE0_W::new(self, 1)
            }
            ///Bit 2 - Timer/Counter0 Output Compare Match A Interrupt Enable
            #[inline(always)]
            pub fn ocie0a(&mut self) -> OCIE0A_W<'_, TIMSK0_SPEC> {
                OCIE0A_W::new(self, 2)
            }
            ///Bit 3 - Timer/Counter0 Output Compare Match B Interrupt Enable
            #[inline(always)]
            pub fn ocie0b(&mut self) -> OCIE0B_W<'_, TIMSK0_SPEC> {
                OCIE0B_W::new(self, 3)
            }
        }
        /**Timer/Counter0 Interrupt Mask Register

You can [`read`](crate::Reg::read) this register and get [`timsk0::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`timsk0::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct TIMSK0_SPEC;
        impl crate::RegisterSpec for TIMSK0_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`timsk0::R`](R) reader structure
        impl crate::Readable for TIMSK0_SPEC {}
        ///`write(|w| ..)` method takes [`timsk0::W`](W) writer structure
        impl crate::Writable for TIMSK0_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets TIMSK0 to value 0
        impl crate::Resettable for TIMSK0_SPEC {}
    }
}
///Watchdog Timer
pub type WDT = crate::Periph<wdt::RegisterBlock, 0x41>;
impl core::fmt::Debug for WDT {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("WDT").finish()
    }
}
///Watchdog Timer
pub mod wdt {
    #[repr(C)]
    ///Register block
    pub struct RegisterBlock {
        wdtcr: WDTCR,
    }
    impl RegisterBlock {
        ///0x00 - Watchdog Timer Control Register
        #[inline(always)]
        pub const fn wdtcr(&self) -> &WDTCR {
            &self.wdtcr
        }
    }
    /**WDTCR (rw) register accessor: Watchdog Timer Control Register

You can [`read`](crate::Reg::read) this register and get [`wdtcr::R`]. You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`wdtcr::W`]. You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).

For information about available fields see [`mod@wdtcr`] module*/
    pub type WDTCR = crate::Reg<wdtcr::WDTCR_SPEC>;
    ///Watchdog Timer Control Register
    pub mod wdtcr {
        ///Register `WDTCR` reader
        pub type R = crate::R<WDTCR_SPEC>;
        ///Register `WDTCR` writer
        pub type W = crate::W<WDTCR_SPEC>;
        /**Watchdog Timer Prescaler - Low Bits

Value on reset: 0*/
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum WDPL_A {
            ///0: - 2048 cycles, ~16ms/512K (524288) cycles, ~4s if WDPH is set
            CYCLES_2K_512K = 0,
            ///1: - 4096 cycles, ~32ms/1024K (1048576) cycles, ~8s if WDPH is set
            CYCLES_4K_1024K = 1,
            ///2: - 8192 cycles, ~64ms
            CYCLES_8K = 2,
            ///3: - 16K (16384) cycles, ~0.125s
            CYCLES_16K = 3,
            ///4: - 32K (32768) cycles, ~0.25s
            CYCLES_32K = 4,
            ///5: - 64K (65536) cycles, ~0.5s
            CYCLES_64K = 5,
            ///6: - 128K (131072) cycles, ~1s
            CYCLES_128K = 6,
            ///7: - 256K (262144) cycles, ~2s
            CYCLES_256K = 7,
        }
        impl From<WDPL_A> for u8 {
            #[inline(always)]
            fn from(variant: WDPL_A) -> Self {
                variant as _
            }
        }
        impl crate::FieldSpec for WDPL_A {
            type Ux = u8;
        }
        impl crate::IsEnum for WDPL_A {}
        ///Field `WDPL` reader - Watchdog Timer Prescaler - Low Bits
        pub type WDPL_R = crate::FieldReader<WDPL_A>;
        impl WDPL_R {
            ///Get enumerated values variant
            #[inline(always)]
            pub const fn variant(&self) -> WDPL_A {
                match self.bits {
                    0 => WDPL_A::CYCLES_2K_512K,
                    1 => WDPL_A::CYCLES_4K_1024K,
                    2 => WDPL_A::CYCLES_8K,
                    3 => WDPL_A::CYCLES_16K,
                    4 => WDPL_A::CYCLES_32K,
                    5 => WDPL_A::CYCLES_64K,
                    6 => WDPL_A::CYCLES_128K,
                    7 => WDPL_A::CYCLES_256K,
                    _ => unreachable!(),
                }
            }
            ///- 2048 cycles, ~16ms/512K (524288) cycles, ~4s if WDPH is set
            #[inline(always)]
            pub fn is_cycles_2k_512k(&self) -> bool {
                *self == WDPL_A::CYCLES_2K_512K
            }
            ///- 4096 cycles, ~32ms/1024K (1048576) cycles, ~8s if WDPH is set
            #[inline(always)]
            pub fn is_cycles_4k_1024k(&self) -> bool {
                *self == WDPL_A::CYCLES_4K_1024K
            }
            ///- 8192 cycles, ~64ms
            #[inline(always)]
            pub fn is_cycles_8k(&self) -> bool {
                *self == WDPL_A::CYCLES_8K
            }
            ///- 16K (16384) cycles, ~0.125s
            #[inline(always)]
            pub fn is_cycles_16k(&self) -> bool {
                *self == WDPL_A::CYCLES_16K
            }
            ///- 32K (32768) cycles, ~0.25s
            #[inline(always)]
            pub fn is_cycles_32k(&self) -> bool {
                *self == WDPL_A::CYCLES_32K
            }
            ///- 64K (65536) cycles, ~0.5s
            #[inline(always)]
            pub fn is_cycles_64k(&self) -> bool {
                *self == WDPL_A::CYCLES_64K
            }
            ///- 128K (131072) cycles, ~1s
            #[inline(always)]
            pub fn is_cycles_128k(&self) -> bool {
                *self == WDPL_A::CYCLES_128K
            }
            ///- 256K (262144) cycles, ~2s
            #[inline(always)]
            pub fn is_cycles_256k(&self) -> bool {
                *self == WDPL_A::CYCLES_256K
            }
        }
        ///Field `WDPL` writer - Watchdog Timer Prescaler - Low Bits
        pub type WDPL_W<'a, REG> = crate::FieldWriter<'a, REG, 3, WDPL_A, crate::Safe>;
        impl<'a, REG> WDPL_W<'a, REG>
        where
            REG: crate::Writable + crate::RegisterSpec,
            REG::Ux: From<u8>,
        {
            ///- 2048 cycles, ~16ms/512K (524288) cycles, ~4s if WDPH is set
            #[inline(always)]
            pub fn cycles_2k_512k(self) -> &'a mut crate::W<REG> {
                self.variant(WDPL_A::CYCLES_2K_512K)
            }
            ///- 4096 cycles, ~32ms/1024K (1048576) cycles, ~8s if WDPH is set
            #[inline(always)]
            pub fn cycles_4k_1024k(self) -> &'a mut crate::W<REG> {
                self.variant(WDPL_A::CYCLES_4K_1024K)
            }
            ///- 8192 cycles, ~64ms
            #[inline(always)]
            pub fn cycles_8k(self) -> &'a mut crate::W<REG> {
                self.variant(WDPL_A::CYCLES_8K)
            }
            ///- 16K (16384) cycles, ~0.125s
            #[inline(always)]
            pub fn cycles_16k(self) -> &'a mut crate::W<REG> {
                self.variant(WDPL_A::CYCLES_16K)
            }
            ///- 32K (32768) cycles, ~0.25s
            #[inline(always)]
            pub fn cycles_32k(self) -> &'a mut crate::W<REG> {
                self.variant(WDPL_A::CYCLES_32K)
            }
            ///- 64K (65536) cycles, ~0.5s
            #[inline(always)]
            pub fn cycles_64k(self) -> &'a mut crate::W<REG> {
                self.variant(WDPL_A::CYCLES_64K)
            }
            ///- 128K (131072) cycles, ~1s
            #[inline(always)]
            pub fn cycles_128k(self) -> &'a mut crate::W<REG> {
                self.variant(WDPL_A::CYCLES_128K)
            }
            ///- 256K (262144) cycles, ~2s
            #[inline(always)]
            pub fn cycles_256k(self) -> &'a mut crate::W<REG> {
                self.variant(WDPL_A::CYCLES_256K)
            }
        }
        ///Field `WDE` reader - Watch Dog Enable
        pub type WDE_R = crate::BitReader;
        ///Field `WDE` writer - Watch Dog Enable
        pub type WDE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `WDCE` reader - Watchdog Change Enable
        pub type WDCE_R = crate::BitReader;
        ///Field `WDCE` writer - Watchdog Change Enable
        pub type WDCE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `WDPH` reader - Watchdog Timer Prescaler - High Bit
        pub type WDPH_R = crate::BitReader;
        ///Field `WDPH` writer - Watchdog Timer Prescaler - High Bit
        pub type WDPH_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `WDTIE` reader - Watchdog Timeout Interrupt Enable
        pub type WDTIE_R = crate::BitReader;
        ///Field `WDTIE` writer - Watchdog Timeout Interrupt Enable
        pub type WDTIE_W<'a, REG> = crate::BitWriter<'a, REG>;
        ///Field `WDTIF` reader - Watchdog Timeout Interrupt Flag
        pub type WDTIF_R = crate::BitReader;
        ///Field `WDTIF` writer - Watchdog Timeout Interrupt Flag
        pub type WDTIF_W<'a, REG> = crate::BitWriter<'a, REG>;
        impl R {
            ///Bits 0:2 - Watchdog Timer Prescaler - Low Bits
            #[inline(always)]
            pub fn wdpl(&self) -> WDPL_R {
                WDPL_R::new(self.bits & 7)
            }
            ///Bit 3 - Watch Dog Enable
            #[inline(always)]
            pub fn wde(&self) -> WDE_R {
                WDE_R::new(((self.bits >> 3) & 1) != 0)
            }
            ///Bit 4 - Watchdog Change Enable
            #[inline(always)]
            pub fn wdce(&self) -> WDCE_R {
                WDCE_R::new(((self.bits >> 4) & 1) != 0)
            }
            ///Bit 5 - Watchdog Timer Prescaler - High Bit
            #[inline(always)]
            pub fn wdph(&self) -> WDPH_R {
                WDPH_R::new(((self.bits >> 5) & 1) != 0)
            }
            ///Bit 6 - Watchdog Timeout Interrupt Enable
            #[inline(always)]
            pub fn wdtie(&self) -> WDTIE_R {
                WDTIE_R::new(((self.bits >> 6) & 1) != 0)
            }
            ///Bit 7 - Watchdog Timeout Interrupt Flag
            #[inline(always)]
            pub fn wdtif(&self) -> WDTIF_R {
                WDTIF_R::new(((self.bits >> 7) & 1) != 0)
            }
        }
        impl W {
            ///Bits 0:2 - Watchdog Timer Prescaler - Low Bits
            #[inline(always)]
            pub fn wdpl(&mut self) -> WDPL_W<'_, WDTCR_SPEC> {
                WDPL_W::new(self, 0)
            }
            ///Bit 3 - Watch Dog Enable
            #[inline(always)]
            pub fn wde(&mut self) -> WDE_W<'_, WDTCR_SPEC> {
                WDE_W::new(self, 3)
            }
            ///Bit 4 - Watchdog Change Enable
            #[inline(always)]
            pub fn wdce(&mut self) -> WDCE_W<'_, WDTCR_SPEC> {
                WDCE_W::new(self, 4)
            }
            ///Bit 5 - Watchdog Timer Prescaler - High Bit
            #[inline(always)]
            pub fn wdph(&mut self) -> WDPH_W<'_, WDTCR_SPEC> {
                WDPH_W::new(self, 5)
            }
            ///Bit 6 - Watchdog Timeout Interrupt Enable
            #[inline(always)]
            pub fn wdtie(&mut self) -> WDTIE_W<'_, WDTCR_SPEC> {
                WDTIE_W::new(self, 6)
            }
            ///Bit 7 - Watchdog Timeout Interrupt Flag
            #[inline(always)]
            pub fn wdtif(&mut self) -> WDTIF_W<'_, WDTCR_SPEC> {
                WDTIF_W::new(self, 7)
            }
        }
        /**Watchdog Timer Control Register

You can [`read`](crate::Reg::read) this register and get [`wdtcr::R`](R). You can [`reset`](crate::Reg::reset), [`write`](crate::Reg::write), [`write_with_zero`](crate::Reg::write_with_zero) this register using [`wdtcr::W`](W). You can also [`modify`](crate::Reg::modify) this register. See [API](https://docs.rs/svd2rust/#read--modify--write-api).*/
        pub struct WDTCR_SPEC;
        impl crate::RegisterSpec for WDTCR_SPEC {
            type Ux = u8;
        }
        ///`read()` method returns [`wdtcr::R`](R) reader structure
        impl crate::Readable for WDTCR_SPEC {}
        ///`write(|w| ..)` method takes [`wdtcr::W`](W) writer structure
        impl crate::Writable for WDTCR_SPEC {
            type Safety = crate::Unsafe;
        }
        ///`reset()` method sets WDTCR to value 0
        impl crate::Resettable for WDTCR_SPEC {}
    }
}
use super::DEVICE_PERIPHERALS;
/// All the peripherals.
#[allow(non_snake_case)]
pub struct Peripherals {
    ///AC
    pub AC: AC,
    ///ADC
    pub ADC: ADC,
    ///CPU
    pub CPU: CPU,
    ///EEPROM
    pub EEPROM: EEPROM,
    ///EXINT
    pub EXINT: EXINT,
    ///FUSE
    pub FUSE: FUSE,
    ///LOCKBIT
    pub LOCKBIT: LOCKBIT,
    ///PORTB
    pub PORTB: PORTB,
    ///TC0
    pub TC0: TC0,
    ///WDT
    pub WDT: WDT,
}
impl Peripherals {
    /// Returns all the peripherals *once*.
    #[cfg(feature = "critical-section")]
    #[inline]
    pub fn take() -> Option<Self> {
        critical_section::with(|_| {
            if unsafe { DEVICE_PERIPHERALS } {
                return None;
            }
            Some(unsafe { Peripherals::steal() })
        })
    }
    /// Unchecked version of `Peripherals::take`.
    ///
    /// # Safety
    ///
    /// Each of the returned peripherals must be used at most once.
    #[inline]
    pub unsafe fn steal() -> Self {
        DEVICE_PERIPHERALS = true;
        Peripherals {
            AC: AC::steal(),
            ADC: ADC::steal(),
            CPU: CPU::steal(),
            EEPROM: EEPROM::steal(),
            EXINT: EXINT::steal(),
            FUSE: FUSE::steal(),
            LOCKBIT: LOCKBIT::steal(),
            PORTB: PORTB::steal(),
            TC0: TC0::steal(),
            WDT: WDT::steal(),
        }
    }
}
