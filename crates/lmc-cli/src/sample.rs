//! Built-in demo program.

/// Running-total program: reads integers until 0 is entered, then prints
/// the total.
///
/// ```text
/// 00  901  INP          read a value
/// 01  708  BRZ 08       zero ends the loop
/// 02  311  STA 11       seed the total
/// 03  901  INP          read the next value
/// 04  708  BRZ 08
/// 05  111  ADD 11       add the total so far
/// 06  311  STA 11
/// 07  603  BRA 03
/// 08  511  LDA 11
/// 09  902  OUT          print the total
/// 10  000  HLT
/// 11  000  DAT          the total
/// ```
pub const SAMPLE_PROGRAM: &[u16] = &[901, 708, 311, 901, 708, 111, 311, 603, 511, 902, 0, 0];
