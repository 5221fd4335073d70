//! Verdana advance widths, in font design units (2048 per em).
//!
//! `widths[i]` is the advance of ASCII character `i + 0x20`, covering space
//! through `~`. Values were extracted from the `hmtx` tables of Verdana and
//! Verdana Bold and are treated as versioned data: changing a value changes
//! every badge that contains the glyph.

/// Design units per em for both tables.
pub const UNITS_PER_EM: u16 = 2048;

/// First covered code point.
pub const FIRST: u32 = 0x20;

/// Number of covered code points.
pub const LEN: usize = 95;

#[rustfmt::skip]
pub static VERDANA: [u16; LEN] = [
    //  sp     !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
       720,  824, 1047, 1874, 1303, 2222, 1493,  556, 1059, 1059, 1303, 1874,  748,  878,  748, 1059,
    //   0     1     2     3     4     5     6     7     8     9     :     ;     <     =     >     ?
      1303, 1303, 1303, 1303, 1303, 1303, 1303, 1303, 1303, 1303,  878,  878, 1874, 1874, 1874, 1112,
    //   @     A     B     C     D     E     F     G     H     I     J     K     L     M     N     O
      2048, 1401, 1405, 1430, 1577, 1294, 1178, 1587, 1540,  862,  941, 1418, 1151, 1722, 1530, 1612,
    //   P     Q     R     S     T     U     V     W     X     Y     Z     [     \     ]     ^     _
      1242, 1612, 1424, 1401, 1233, 1500, 1401, 2025, 1403, 1237, 1400, 1059, 1059, 1059, 1874, 1303,
    //   `     a     b     c     d     e     f     g     h     i     j     k     l     m     n     o
      1303, 1227, 1278, 1063, 1278, 1213,  720, 1278, 1296,  563,  686, 1207,  563, 1989, 1296, 1234,
    //   p     q     r     s     t     u     v     w     x     y     z     {     |     }     ~
      1278, 1278,  874, 1064,  807, 1296, 1207, 1665, 1207, 1207, 1061, 1303, 1059, 1303, 1874,
];

#[rustfmt::skip]
pub static VERDANA_BOLD: [u16; LEN] = [
    //  sp     !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
       700,  818, 1203, 1870, 1423, 2804, 1792,  675, 1092, 1092, 1423, 1870,  731,  983,  731, 1493,
    //   0     1     2     3     4     5     6     7     8     9     :     ;     <     =     >     ?
      1459, 1459, 1459, 1459, 1459, 1459, 1459, 1459, 1459, 1459,  819,  819, 1870, 1870, 1870, 1264,
    //   @     A     B     C     D     E     F     G     H     I     J     K     L     M     N     O
      1925, 1589, 1565, 1479, 1726, 1401, 1311, 1669, 1736, 1074, 1126, 1610, 1288, 1950, 1736, 1740,
    //   P     Q     R     S     T     U     V     W     X     Y     Z     [     \     ]     ^     _
      1503, 1740, 1630, 1448, 1379, 1694, 1589, 2314, 1589, 1520, 1436, 1092, 1493, 1092, 1870, 1423,
    //   `     a     b     c     d     e     f     g     h     i     j     k     l     m     n     o
      1423, 1366, 1432, 1183, 1432, 1354,  837, 1432, 1458,  700,  806, 1370,  700, 2186, 1458, 1396,
    //   p     q     r     s     t     u     v     w     x     y     z     {     |     }     ~
      1432, 1432, 1024, 1190,  966, 1458, 1327, 1980, 1356, 1327, 1180, 1458, 1092, 1458, 1870,
];
