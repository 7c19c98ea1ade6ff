//! Unicode numeric values (general categories Nd, Nl and No), generated
//! from the Unicode Character Database 14.0.0.

/// First code point of every run of ten decimal digits (Nd)
pub(super) const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x00030,
    0x00660,
    0x006F0,
    0x007C0,
    0x00966,
    0x009E6,
    0x00A66,
    0x00AE6,
    0x00B66,
    0x00BE6,
    0x00C66,
    0x00CE6,
    0x00D66,
    0x00DE6,
    0x00E50,
    0x00ED0,
    0x00F20,
    0x01040,
    0x01090,
    0x017E0,
    0x01810,
    0x01946,
    0x019D0,
    0x01A80,
    0x01A90,
    0x01B50,
    0x01BB0,
    0x01C40,
    0x01C50,
    0x0A620,
    0x0A8D0,
    0x0A900,
    0x0A9D0,
    0x0A9F0,
    0x0AA50,
    0x0ABF0,
    0x0FF10,
    0x104A0,
    0x10D30,
    0x11066,
    0x110F0,
    0x11136,
    0x111D0,
    0x112F0,
    0x11450,
    0x114D0,
    0x11650,
    0x116C0,
    0x11730,
    0x118E0,
    0x11950,
    0x11C50,
    0x11D50,
    0x11DA0,
    0x16A60,
    0x16AC0,
    0x16B50,
    0x1D7CE,
    0x1D7D8,
    0x1D7E2,
    0x1D7EC,
    0x1D7F6,
    0x1E140,
    0x1E2F0,
    0x1E950,
    0x1FBF0,
];

/// `(first, last, value of first)` ranges; the value grows by one per code
/// point inside a range. Sorted by code point.
pub(super) const NUMERIC_VALUES: &[(u32, u32, f64)] = &[
    (0x00030, 0x00039, 0.0),
    (0x000B2, 0x000B3, 2.0),
    (0x000B9, 0x000B9, 1.0),
    (0x000BC, 0x000BC, 1.0 / 4.0),
    (0x000BD, 0x000BD, 1.0 / 2.0),
    (0x000BE, 0x000BE, 3.0 / 4.0),
    (0x00660, 0x00669, 0.0),
    (0x006F0, 0x006F9, 0.0),
    (0x007C0, 0x007C9, 0.0),
    (0x00966, 0x0096F, 0.0),
    (0x009E6, 0x009EF, 0.0),
    (0x009F4, 0x009F4, 1.0 / 16.0),
    (0x009F5, 0x009F5, 1.0 / 8.0),
    (0x009F6, 0x009F6, 3.0 / 16.0),
    (0x009F7, 0x009F7, 1.0 / 4.0),
    (0x009F8, 0x009F8, 3.0 / 4.0),
    (0x009F9, 0x009F9, 16.0),
    (0x00A66, 0x00A6F, 0.0),
    (0x00AE6, 0x00AEF, 0.0),
    (0x00B66, 0x00B6F, 0.0),
    (0x00B72, 0x00B72, 1.0 / 4.0),
    (0x00B73, 0x00B73, 1.0 / 2.0),
    (0x00B74, 0x00B74, 3.0 / 4.0),
    (0x00B75, 0x00B75, 1.0 / 16.0),
    (0x00B76, 0x00B76, 1.0 / 8.0),
    (0x00B77, 0x00B77, 3.0 / 16.0),
    (0x00BE6, 0x00BF0, 0.0),
    (0x00BF1, 0x00BF1, 100.0),
    (0x00BF2, 0x00BF2, 1000.0),
    (0x00C66, 0x00C6F, 0.0),
    (0x00C78, 0x00C7B, 0.0),
    (0x00C7C, 0x00C7E, 1.0),
    (0x00CE6, 0x00CEF, 0.0),
    (0x00D58, 0x00D58, 1.0 / 160.0),
    (0x00D59, 0x00D59, 1.0 / 40.0),
    (0x00D5A, 0x00D5A, 3.0 / 80.0),
    (0x00D5B, 0x00D5B, 1.0 / 20.0),
    (0x00D5C, 0x00D5C, 1.0 / 10.0),
    (0x00D5D, 0x00D5D, 3.0 / 20.0),
    (0x00D5E, 0x00D5E, 1.0 / 5.0),
    (0x00D66, 0x00D70, 0.0),
    (0x00D71, 0x00D71, 100.0),
    (0x00D72, 0x00D72, 1000.0),
    (0x00D73, 0x00D73, 1.0 / 4.0),
    (0x00D74, 0x00D74, 1.0 / 2.0),
    (0x00D75, 0x00D75, 3.0 / 4.0),
    (0x00D76, 0x00D76, 1.0 / 16.0),
    (0x00D77, 0x00D77, 1.0 / 8.0),
    (0x00D78, 0x00D78, 3.0 / 16.0),
    (0x00DE6, 0x00DEF, 0.0),
    (0x00E50, 0x00E59, 0.0),
    (0x00ED0, 0x00ED9, 0.0),
    (0x00F20, 0x00F29, 0.0),
    (0x00F2A, 0x00F2A, 1.0 / 2.0),
    (0x00F2B, 0x00F2B, 3.0 / 2.0),
    (0x00F2C, 0x00F2C, 5.0 / 2.0),
    (0x00F2D, 0x00F2D, 7.0 / 2.0),
    (0x00F2E, 0x00F2E, 9.0 / 2.0),
    (0x00F2F, 0x00F2F, 11.0 / 2.0),
    (0x00F30, 0x00F30, 13.0 / 2.0),
    (0x00F31, 0x00F31, 15.0 / 2.0),
    (0x00F32, 0x00F32, 17.0 / 2.0),
    (0x00F33, 0x00F33, -1.0 / 2.0),
    (0x01040, 0x01049, 0.0),
    (0x01090, 0x01099, 0.0),
    (0x01369, 0x01372, 1.0),
    (0x01373, 0x01373, 20.0),
    (0x01374, 0x01374, 30.0),
    (0x01375, 0x01375, 40.0),
    (0x01376, 0x01376, 50.0),
    (0x01377, 0x01377, 60.0),
    (0x01378, 0x01378, 70.0),
    (0x01379, 0x01379, 80.0),
    (0x0137A, 0x0137A, 90.0),
    (0x0137B, 0x0137B, 100.0),
    (0x0137C, 0x0137C, 10000.0),
    (0x016EE, 0x016F0, 17.0),
    (0x017E0, 0x017E9, 0.0),
    (0x017F0, 0x017F9, 0.0),
    (0x01810, 0x01819, 0.0),
    (0x01946, 0x0194F, 0.0),
    (0x019D0, 0x019D9, 0.0),
    (0x019DA, 0x019DA, 1.0),
    (0x01A80, 0x01A89, 0.0),
    (0x01A90, 0x01A99, 0.0),
    (0x01B50, 0x01B59, 0.0),
    (0x01BB0, 0x01BB9, 0.0),
    (0x01C40, 0x01C49, 0.0),
    (0x01C50, 0x01C59, 0.0),
    (0x02070, 0x02070, 0.0),
    (0x02074, 0x02079, 4.0),
    (0x02080, 0x02089, 0.0),
    (0x02150, 0x02150, 1.0 / 7.0),
    (0x02151, 0x02151, 1.0 / 9.0),
    (0x02152, 0x02152, 1.0 / 10.0),
    (0x02153, 0x02153, 1.0 / 3.0),
    (0x02154, 0x02154, 2.0 / 3.0),
    (0x02155, 0x02155, 1.0 / 5.0),
    (0x02156, 0x02156, 2.0 / 5.0),
    (0x02157, 0x02157, 3.0 / 5.0),
    (0x02158, 0x02158, 4.0 / 5.0),
    (0x02159, 0x02159, 1.0 / 6.0),
    (0x0215A, 0x0215A, 5.0 / 6.0),
    (0x0215B, 0x0215B, 1.0 / 8.0),
    (0x0215C, 0x0215C, 3.0 / 8.0),
    (0x0215D, 0x0215D, 5.0 / 8.0),
    (0x0215E, 0x0215E, 7.0 / 8.0),
    (0x0215F, 0x0215F, 1.0),
    (0x02160, 0x0216B, 1.0),
    (0x0216C, 0x0216C, 50.0),
    (0x0216D, 0x0216D, 100.0),
    (0x0216E, 0x0216E, 500.0),
    (0x0216F, 0x0216F, 1000.0),
    (0x02170, 0x0217B, 1.0),
    (0x0217C, 0x0217C, 50.0),
    (0x0217D, 0x0217D, 100.0),
    (0x0217E, 0x0217E, 500.0),
    (0x0217F, 0x0217F, 1000.0),
    (0x02180, 0x02180, 1000.0),
    (0x02181, 0x02181, 5000.0),
    (0x02182, 0x02182, 10000.0),
    (0x02185, 0x02185, 6.0),
    (0x02186, 0x02186, 50.0),
    (0x02187, 0x02187, 50000.0),
    (0x02188, 0x02188, 100000.0),
    (0x02189, 0x02189, 0.0),
    (0x02460, 0x02473, 1.0),
    (0x02474, 0x02487, 1.0),
    (0x02488, 0x0249B, 1.0),
    (0x024EA, 0x024EA, 0.0),
    (0x024EB, 0x024F4, 11.0),
    (0x024F5, 0x024FE, 1.0),
    (0x024FF, 0x024FF, 0.0),
    (0x02776, 0x0277F, 1.0),
    (0x02780, 0x02789, 1.0),
    (0x0278A, 0x02793, 1.0),
    (0x02CFD, 0x02CFD, 1.0 / 2.0),
    (0x03007, 0x03007, 0.0),
    (0x03021, 0x03029, 1.0),
    (0x03038, 0x03038, 10.0),
    (0x03039, 0x03039, 20.0),
    (0x0303A, 0x0303A, 30.0),
    (0x03192, 0x03195, 1.0),
    (0x03220, 0x03229, 1.0),
    (0x03248, 0x03248, 10.0),
    (0x03249, 0x03249, 20.0),
    (0x0324A, 0x0324A, 30.0),
    (0x0324B, 0x0324B, 40.0),
    (0x0324C, 0x0324C, 50.0),
    (0x0324D, 0x0324D, 60.0),
    (0x0324E, 0x0324E, 70.0),
    (0x0324F, 0x0324F, 80.0),
    (0x03251, 0x0325F, 21.0),
    (0x03280, 0x03289, 1.0),
    (0x032B1, 0x032BF, 36.0),
    (0x0A620, 0x0A629, 0.0),
    (0x0A6E6, 0x0A6EE, 1.0),
    (0x0A6EF, 0x0A6EF, 0.0),
    (0x0A830, 0x0A830, 1.0 / 4.0),
    (0x0A831, 0x0A831, 1.0 / 2.0),
    (0x0A832, 0x0A832, 3.0 / 4.0),
    (0x0A833, 0x0A833, 1.0 / 16.0),
    (0x0A834, 0x0A834, 1.0 / 8.0),
    (0x0A835, 0x0A835, 3.0 / 16.0),
    (0x0A8D0, 0x0A8D9, 0.0),
    (0x0A900, 0x0A909, 0.0),
    (0x0A9D0, 0x0A9D9, 0.0),
    (0x0A9F0, 0x0A9F9, 0.0),
    (0x0AA50, 0x0AA59, 0.0),
    (0x0ABF0, 0x0ABF9, 0.0),
    (0x0FF10, 0x0FF19, 0.0),
    (0x10107, 0x10110, 1.0),
    (0x10111, 0x10111, 20.0),
    (0x10112, 0x10112, 30.0),
    (0x10113, 0x10113, 40.0),
    (0x10114, 0x10114, 50.0),
    (0x10115, 0x10115, 60.0),
    (0x10116, 0x10116, 70.0),
    (0x10117, 0x10117, 80.0),
    (0x10118, 0x10118, 90.0),
    (0x10119, 0x10119, 100.0),
    (0x1011A, 0x1011A, 200.0),
    (0x1011B, 0x1011B, 300.0),
    (0x1011C, 0x1011C, 400.0),
    (0x1011D, 0x1011D, 500.0),
    (0x1011E, 0x1011E, 600.0),
    (0x1011F, 0x1011F, 700.0),
    (0x10120, 0x10120, 800.0),
    (0x10121, 0x10121, 900.0),
    (0x10122, 0x10122, 1000.0),
    (0x10123, 0x10123, 2000.0),
    (0x10124, 0x10124, 3000.0),
    (0x10125, 0x10125, 4000.0),
    (0x10126, 0x10126, 5000.0),
    (0x10127, 0x10127, 6000.0),
    (0x10128, 0x10128, 7000.0),
    (0x10129, 0x10129, 8000.0),
    (0x1012A, 0x1012A, 9000.0),
    (0x1012B, 0x1012B, 10000.0),
    (0x1012C, 0x1012C, 20000.0),
    (0x1012D, 0x1012D, 30000.0),
    (0x1012E, 0x1012E, 40000.0),
    (0x1012F, 0x1012F, 50000.0),
    (0x10130, 0x10130, 60000.0),
    (0x10131, 0x10131, 70000.0),
    (0x10132, 0x10132, 80000.0),
    (0x10133, 0x10133, 90000.0),
    (0x10140, 0x10140, 1.0 / 4.0),
    (0x10141, 0x10141, 1.0 / 2.0),
    (0x10142, 0x10142, 1.0),
    (0x10143, 0x10143, 5.0),
    (0x10144, 0x10144, 50.0),
    (0x10145, 0x10145, 500.0),
    (0x10146, 0x10146, 5000.0),
    (0x10147, 0x10147, 50000.0),
    (0x10148, 0x10148, 5.0),
    (0x10149, 0x10149, 10.0),
    (0x1014A, 0x1014A, 50.0),
    (0x1014B, 0x1014B, 100.0),
    (0x1014C, 0x1014C, 500.0),
    (0x1014D, 0x1014D, 1000.0),
    (0x1014E, 0x1014E, 5000.0),
    (0x1014F, 0x1014F, 5.0),
    (0x10150, 0x10150, 10.0),
    (0x10151, 0x10151, 50.0),
    (0x10152, 0x10152, 100.0),
    (0x10153, 0x10153, 500.0),
    (0x10154, 0x10154, 1000.0),
    (0x10155, 0x10155, 10000.0),
    (0x10156, 0x10156, 50000.0),
    (0x10157, 0x10157, 10.0),
    (0x10158, 0x10158, 1.0),
    (0x10159, 0x10159, 1.0),
    (0x1015A, 0x1015B, 1.0),
    (0x1015C, 0x1015C, 2.0),
    (0x1015D, 0x1015D, 2.0),
    (0x1015E, 0x1015E, 2.0),
    (0x1015F, 0x1015F, 5.0),
    (0x10160, 0x10160, 10.0),
    (0x10161, 0x10161, 10.0),
    (0x10162, 0x10162, 10.0),
    (0x10163, 0x10163, 10.0),
    (0x10164, 0x10164, 10.0),
    (0x10165, 0x10165, 30.0),
    (0x10166, 0x10166, 50.0),
    (0x10167, 0x10167, 50.0),
    (0x10168, 0x10168, 50.0),
    (0x10169, 0x10169, 50.0),
    (0x1016A, 0x1016A, 100.0),
    (0x1016B, 0x1016B, 300.0),
    (0x1016C, 0x1016C, 500.0),
    (0x1016D, 0x1016D, 500.0),
    (0x1016E, 0x1016E, 500.0),
    (0x1016F, 0x1016F, 500.0),
    (0x10170, 0x10170, 500.0),
    (0x10171, 0x10171, 1000.0),
    (0x10172, 0x10172, 5000.0),
    (0x10173, 0x10173, 5.0),
    (0x10174, 0x10174, 50.0),
    (0x10175, 0x10175, 1.0 / 2.0),
    (0x10176, 0x10176, 1.0 / 2.0),
    (0x10177, 0x10177, 2.0 / 3.0),
    (0x10178, 0x10178, 3.0 / 4.0),
    (0x1018A, 0x1018A, 0.0),
    (0x1018B, 0x1018B, 1.0 / 4.0),
    (0x102E1, 0x102EA, 1.0),
    (0x102EB, 0x102EB, 20.0),
    (0x102EC, 0x102EC, 30.0),
    (0x102ED, 0x102ED, 40.0),
    (0x102EE, 0x102EE, 50.0),
    (0x102EF, 0x102EF, 60.0),
    (0x102F0, 0x102F0, 70.0),
    (0x102F1, 0x102F1, 80.0),
    (0x102F2, 0x102F2, 90.0),
    (0x102F3, 0x102F3, 100.0),
    (0x102F4, 0x102F4, 200.0),
    (0x102F5, 0x102F5, 300.0),
    (0x102F6, 0x102F6, 400.0),
    (0x102F7, 0x102F7, 500.0),
    (0x102F8, 0x102F8, 600.0),
    (0x102F9, 0x102F9, 700.0),
    (0x102FA, 0x102FA, 800.0),
    (0x102FB, 0x102FB, 900.0),
    (0x10320, 0x10320, 1.0),
    (0x10321, 0x10321, 5.0),
    (0x10322, 0x10322, 10.0),
    (0x10323, 0x10323, 50.0),
    (0x10341, 0x10341, 90.0),
    (0x1034A, 0x1034A, 900.0),
    (0x103D1, 0x103D2, 1.0),
    (0x103D3, 0x103D3, 10.0),
    (0x103D4, 0x103D4, 20.0),
    (0x103D5, 0x103D5, 100.0),
    (0x104A0, 0x104A9, 0.0),
    (0x10858, 0x1085A, 1.0),
    (0x1085B, 0x1085B, 10.0),
    (0x1085C, 0x1085C, 20.0),
    (0x1085D, 0x1085D, 100.0),
    (0x1085E, 0x1085E, 1000.0),
    (0x1085F, 0x1085F, 10000.0),
    (0x10879, 0x1087D, 1.0),
    (0x1087E, 0x1087E, 10.0),
    (0x1087F, 0x1087F, 20.0),
    (0x108A7, 0x108AA, 1.0),
    (0x108AB, 0x108AC, 4.0),
    (0x108AD, 0x108AD, 10.0),
    (0x108AE, 0x108AE, 20.0),
    (0x108AF, 0x108AF, 100.0),
    (0x108FB, 0x108FB, 1.0),
    (0x108FC, 0x108FC, 5.0),
    (0x108FD, 0x108FD, 10.0),
    (0x108FE, 0x108FE, 20.0),
    (0x108FF, 0x108FF, 100.0),
    (0x10916, 0x10916, 1.0),
    (0x10917, 0x10917, 10.0),
    (0x10918, 0x10918, 20.0),
    (0x10919, 0x10919, 100.0),
    (0x1091A, 0x1091B, 2.0),
    (0x109BC, 0x109BC, 11.0 / 12.0),
    (0x109BD, 0x109BD, 1.0 / 2.0),
    (0x109C0, 0x109C9, 1.0),
    (0x109CA, 0x109CA, 20.0),
    (0x109CB, 0x109CB, 30.0),
    (0x109CC, 0x109CC, 40.0),
    (0x109CD, 0x109CD, 50.0),
    (0x109CE, 0x109CE, 60.0),
    (0x109CF, 0x109CF, 70.0),
    (0x109D2, 0x109D2, 100.0),
    (0x109D3, 0x109D3, 200.0),
    (0x109D4, 0x109D4, 300.0),
    (0x109D5, 0x109D5, 400.0),
    (0x109D6, 0x109D6, 500.0),
    (0x109D7, 0x109D7, 600.0),
    (0x109D8, 0x109D8, 700.0),
    (0x109D9, 0x109D9, 800.0),
    (0x109DA, 0x109DA, 900.0),
    (0x109DB, 0x109DB, 1000.0),
    (0x109DC, 0x109DC, 2000.0),
    (0x109DD, 0x109DD, 3000.0),
    (0x109DE, 0x109DE, 4000.0),
    (0x109DF, 0x109DF, 5000.0),
    (0x109E0, 0x109E0, 6000.0),
    (0x109E1, 0x109E1, 7000.0),
    (0x109E2, 0x109E2, 8000.0),
    (0x109E3, 0x109E3, 9000.0),
    (0x109E4, 0x109E4, 10000.0),
    (0x109E5, 0x109E5, 20000.0),
    (0x109E6, 0x109E6, 30000.0),
    (0x109E7, 0x109E7, 40000.0),
    (0x109E8, 0x109E8, 50000.0),
    (0x109E9, 0x109E9, 60000.0),
    (0x109EA, 0x109EA, 70000.0),
    (0x109EB, 0x109EB, 80000.0),
    (0x109EC, 0x109EC, 90000.0),
    (0x109ED, 0x109ED, 100000.0),
    (0x109EE, 0x109EE, 200000.0),
    (0x109EF, 0x109EF, 300000.0),
    (0x109F0, 0x109F0, 400000.0),
    (0x109F1, 0x109F1, 500000.0),
    (0x109F2, 0x109F2, 600000.0),
    (0x109F3, 0x109F3, 700000.0),
    (0x109F4, 0x109F4, 800000.0),
    (0x109F5, 0x109F5, 900000.0),
    (0x109F6, 0x109F6, 1.0 / 12.0),
    (0x109F7, 0x109F7, 1.0 / 6.0),
    (0x109F8, 0x109F8, 1.0 / 4.0),
    (0x109F9, 0x109F9, 1.0 / 3.0),
    (0x109FA, 0x109FA, 5.0 / 12.0),
    (0x109FB, 0x109FB, 1.0 / 2.0),
    (0x109FC, 0x109FC, 7.0 / 12.0),
    (0x109FD, 0x109FD, 2.0 / 3.0),
    (0x109FE, 0x109FE, 3.0 / 4.0),
    (0x109FF, 0x109FF, 5.0 / 6.0),
    (0x10A40, 0x10A43, 1.0),
    (0x10A44, 0x10A44, 10.0),
    (0x10A45, 0x10A45, 20.0),
    (0x10A46, 0x10A46, 100.0),
    (0x10A47, 0x10A47, 1000.0),
    (0x10A48, 0x10A48, 1.0 / 2.0),
    (0x10A7D, 0x10A7D, 1.0),
    (0x10A7E, 0x10A7E, 50.0),
    (0x10A9D, 0x10A9D, 1.0),
    (0x10A9E, 0x10A9E, 10.0),
    (0x10A9F, 0x10A9F, 20.0),
    (0x10AEB, 0x10AEB, 1.0),
    (0x10AEC, 0x10AEC, 5.0),
    (0x10AED, 0x10AED, 10.0),
    (0x10AEE, 0x10AEE, 20.0),
    (0x10AEF, 0x10AEF, 100.0),
    (0x10B58, 0x10B5B, 1.0),
    (0x10B5C, 0x10B5C, 10.0),
    (0x10B5D, 0x10B5D, 20.0),
    (0x10B5E, 0x10B5E, 100.0),
    (0x10B5F, 0x10B5F, 1000.0),
    (0x10B78, 0x10B7B, 1.0),
    (0x10B7C, 0x10B7C, 10.0),
    (0x10B7D, 0x10B7D, 20.0),
    (0x10B7E, 0x10B7E, 100.0),
    (0x10B7F, 0x10B7F, 1000.0),
    (0x10BA9, 0x10BAC, 1.0),
    (0x10BAD, 0x10BAD, 10.0),
    (0x10BAE, 0x10BAE, 20.0),
    (0x10BAF, 0x10BAF, 100.0),
    (0x10CFA, 0x10CFA, 1.0),
    (0x10CFB, 0x10CFB, 5.0),
    (0x10CFC, 0x10CFC, 10.0),
    (0x10CFD, 0x10CFD, 50.0),
    (0x10CFE, 0x10CFE, 100.0),
    (0x10CFF, 0x10CFF, 1000.0),
    (0x10D30, 0x10D39, 0.0),
    (0x10E60, 0x10E69, 1.0),
    (0x10E6A, 0x10E6A, 20.0),
    (0x10E6B, 0x10E6B, 30.0),
    (0x10E6C, 0x10E6C, 40.0),
    (0x10E6D, 0x10E6D, 50.0),
    (0x10E6E, 0x10E6E, 60.0),
    (0x10E6F, 0x10E6F, 70.0),
    (0x10E70, 0x10E70, 80.0),
    (0x10E71, 0x10E71, 90.0),
    (0x10E72, 0x10E72, 100.0),
    (0x10E73, 0x10E73, 200.0),
    (0x10E74, 0x10E74, 300.0),
    (0x10E75, 0x10E75, 400.0),
    (0x10E76, 0x10E76, 500.0),
    (0x10E77, 0x10E77, 600.0),
    (0x10E78, 0x10E78, 700.0),
    (0x10E79, 0x10E79, 800.0),
    (0x10E7A, 0x10E7A, 900.0),
    (0x10E7B, 0x10E7B, 1.0 / 2.0),
    (0x10E7C, 0x10E7C, 1.0 / 4.0),
    (0x10E7D, 0x10E7D, 1.0 / 3.0),
    (0x10E7E, 0x10E7E, 2.0 / 3.0),
    (0x10F1D, 0x10F21, 1.0),
    (0x10F22, 0x10F22, 10.0),
    (0x10F23, 0x10F23, 20.0),
    (0x10F24, 0x10F24, 30.0),
    (0x10F25, 0x10F25, 100.0),
    (0x10F26, 0x10F26, 1.0 / 2.0),
    (0x10F51, 0x10F51, 1.0),
    (0x10F52, 0x10F52, 10.0),
    (0x10F53, 0x10F53, 20.0),
    (0x10F54, 0x10F54, 100.0),
    (0x10FC5, 0x10FC8, 1.0),
    (0x10FC9, 0x10FC9, 10.0),
    (0x10FCA, 0x10FCA, 20.0),
    (0x10FCB, 0x10FCB, 100.0),
    (0x11052, 0x1105B, 1.0),
    (0x1105C, 0x1105C, 20.0),
    (0x1105D, 0x1105D, 30.0),
    (0x1105E, 0x1105E, 40.0),
    (0x1105F, 0x1105F, 50.0),
    (0x11060, 0x11060, 60.0),
    (0x11061, 0x11061, 70.0),
    (0x11062, 0x11062, 80.0),
    (0x11063, 0x11063, 90.0),
    (0x11064, 0x11064, 100.0),
    (0x11065, 0x11065, 1000.0),
    (0x11066, 0x1106F, 0.0),
    (0x110F0, 0x110F9, 0.0),
    (0x11136, 0x1113F, 0.0),
    (0x111D0, 0x111D9, 0.0),
    (0x111E1, 0x111EA, 1.0),
    (0x111EB, 0x111EB, 20.0),
    (0x111EC, 0x111EC, 30.0),
    (0x111ED, 0x111ED, 40.0),
    (0x111EE, 0x111EE, 50.0),
    (0x111EF, 0x111EF, 60.0),
    (0x111F0, 0x111F0, 70.0),
    (0x111F1, 0x111F1, 80.0),
    (0x111F2, 0x111F2, 90.0),
    (0x111F3, 0x111F3, 100.0),
    (0x111F4, 0x111F4, 1000.0),
    (0x112F0, 0x112F9, 0.0),
    (0x11450, 0x11459, 0.0),
    (0x114D0, 0x114D9, 0.0),
    (0x11650, 0x11659, 0.0),
    (0x116C0, 0x116C9, 0.0),
    (0x11730, 0x1173A, 0.0),
    (0x1173B, 0x1173B, 20.0),
    (0x118E0, 0x118EA, 0.0),
    (0x118EB, 0x118EB, 20.0),
    (0x118EC, 0x118EC, 30.0),
    (0x118ED, 0x118ED, 40.0),
    (0x118EE, 0x118EE, 50.0),
    (0x118EF, 0x118EF, 60.0),
    (0x118F0, 0x118F0, 70.0),
    (0x118F1, 0x118F1, 80.0),
    (0x118F2, 0x118F2, 90.0),
    (0x11950, 0x11959, 0.0),
    (0x11C50, 0x11C59, 0.0),
    (0x11C5A, 0x11C63, 1.0),
    (0x11C64, 0x11C64, 20.0),
    (0x11C65, 0x11C65, 30.0),
    (0x11C66, 0x11C66, 40.0),
    (0x11C67, 0x11C67, 50.0),
    (0x11C68, 0x11C68, 60.0),
    (0x11C69, 0x11C69, 70.0),
    (0x11C6A, 0x11C6A, 80.0),
    (0x11C6B, 0x11C6B, 90.0),
    (0x11C6C, 0x11C6C, 100.0),
    (0x11D50, 0x11D59, 0.0),
    (0x11DA0, 0x11DA9, 0.0),
    (0x11FC0, 0x11FC0, 1.0 / 320.0),
    (0x11FC1, 0x11FC1, 1.0 / 160.0),
    (0x11FC2, 0x11FC2, 1.0 / 80.0),
    (0x11FC3, 0x11FC3, 1.0 / 64.0),
    (0x11FC4, 0x11FC4, 1.0 / 40.0),
    (0x11FC5, 0x11FC5, 1.0 / 32.0),
    (0x11FC6, 0x11FC6, 3.0 / 80.0),
    (0x11FC7, 0x11FC7, 3.0 / 64.0),
    (0x11FC8, 0x11FC8, 1.0 / 20.0),
    (0x11FC9, 0x11FC9, 1.0 / 16.0),
    (0x11FCA, 0x11FCA, 1.0 / 16.0),
    (0x11FCB, 0x11FCB, 1.0 / 10.0),
    (0x11FCC, 0x11FCC, 1.0 / 8.0),
    (0x11FCD, 0x11FCD, 3.0 / 20.0),
    (0x11FCE, 0x11FCE, 3.0 / 16.0),
    (0x11FCF, 0x11FCF, 1.0 / 5.0),
    (0x11FD0, 0x11FD0, 1.0 / 4.0),
    (0x11FD1, 0x11FD1, 1.0 / 2.0),
    (0x11FD2, 0x11FD2, 1.0 / 2.0),
    (0x11FD3, 0x11FD3, 3.0 / 4.0),
    (0x11FD4, 0x11FD4, 1.0 / 320.0),
    (0x12400, 0x12407, 2.0),
    (0x12408, 0x1240E, 3.0),
    (0x1240F, 0x12414, 4.0),
    (0x12415, 0x1241D, 1.0),
    (0x1241E, 0x12422, 1.0),
    (0x12423, 0x12424, 2.0),
    (0x12425, 0x1242B, 3.0),
    (0x1242C, 0x1242E, 1.0),
    (0x1242F, 0x12431, 3.0),
    (0x12432, 0x12432, 216000.0),
    (0x12433, 0x12433, 432000.0),
    (0x12434, 0x12436, 1.0),
    (0x12437, 0x12439, 3.0),
    (0x1243A, 0x1243A, 3.0),
    (0x1243B, 0x1243C, 3.0),
    (0x1243D, 0x1243D, 4.0),
    (0x1243E, 0x1243E, 4.0),
    (0x1243F, 0x1243F, 4.0),
    (0x12440, 0x12441, 6.0),
    (0x12442, 0x12442, 7.0),
    (0x12443, 0x12444, 7.0),
    (0x12445, 0x12446, 8.0),
    (0x12447, 0x12447, 9.0),
    (0x12448, 0x12448, 9.0),
    (0x12449, 0x12449, 9.0),
    (0x1244A, 0x1244E, 2.0),
    (0x1244F, 0x12452, 1.0),
    (0x12453, 0x12454, 4.0),
    (0x12455, 0x12455, 5.0),
    (0x12456, 0x12457, 2.0),
    (0x12458, 0x12459, 1.0),
    (0x1245A, 0x1245A, 1.0 / 3.0),
    (0x1245B, 0x1245B, 2.0 / 3.0),
    (0x1245C, 0x1245C, 5.0 / 6.0),
    (0x1245D, 0x1245D, 1.0 / 3.0),
    (0x1245E, 0x1245E, 2.0 / 3.0),
    (0x1245F, 0x1245F, 1.0 / 8.0),
    (0x12460, 0x12460, 1.0 / 4.0),
    (0x12461, 0x12461, 1.0 / 6.0),
    (0x12462, 0x12462, 1.0 / 4.0),
    (0x12463, 0x12463, 1.0 / 4.0),
    (0x12464, 0x12464, 1.0 / 2.0),
    (0x12465, 0x12465, 1.0 / 3.0),
    (0x12466, 0x12466, 2.0 / 3.0),
    (0x12467, 0x12467, 40.0),
    (0x12468, 0x12468, 50.0),
    (0x12469, 0x1246E, 4.0),
    (0x16A60, 0x16A69, 0.0),
    (0x16AC0, 0x16AC9, 0.0),
    (0x16B50, 0x16B59, 0.0),
    (0x16B5B, 0x16B5B, 10.0),
    (0x16B5C, 0x16B5C, 100.0),
    (0x16B5D, 0x16B5D, 10000.0),
    (0x16B5E, 0x16B5E, 1000000.0),
    (0x16B5F, 0x16B5F, 100000000.0),
    (0x16B60, 0x16B60, 10000000000.0),
    (0x16B61, 0x16B61, 1000000000000.0),
    (0x16E80, 0x16E93, 0.0),
    (0x16E94, 0x16E96, 1.0),
    (0x1D2E0, 0x1D2F3, 0.0),
    (0x1D360, 0x1D369, 1.0),
    (0x1D36A, 0x1D36A, 20.0),
    (0x1D36B, 0x1D36B, 30.0),
    (0x1D36C, 0x1D36C, 40.0),
    (0x1D36D, 0x1D36D, 50.0),
    (0x1D36E, 0x1D36E, 60.0),
    (0x1D36F, 0x1D36F, 70.0),
    (0x1D370, 0x1D370, 80.0),
    (0x1D371, 0x1D371, 90.0),
    (0x1D372, 0x1D376, 1.0),
    (0x1D377, 0x1D377, 1.0),
    (0x1D378, 0x1D378, 5.0),
    (0x1D7CE, 0x1D7D7, 0.0),
    (0x1D7D8, 0x1D7E1, 0.0),
    (0x1D7E2, 0x1D7EB, 0.0),
    (0x1D7EC, 0x1D7F5, 0.0),
    (0x1D7F6, 0x1D7FF, 0.0),
    (0x1E140, 0x1E149, 0.0),
    (0x1E2F0, 0x1E2F9, 0.0),
    (0x1E8C7, 0x1E8CF, 1.0),
    (0x1E950, 0x1E959, 0.0),
    (0x1EC71, 0x1EC7A, 1.0),
    (0x1EC7B, 0x1EC7B, 20.0),
    (0x1EC7C, 0x1EC7C, 30.0),
    (0x1EC7D, 0x1EC7D, 40.0),
    (0x1EC7E, 0x1EC7E, 50.0),
    (0x1EC7F, 0x1EC7F, 60.0),
    (0x1EC80, 0x1EC80, 70.0),
    (0x1EC81, 0x1EC81, 80.0),
    (0x1EC82, 0x1EC82, 90.0),
    (0x1EC83, 0x1EC83, 100.0),
    (0x1EC84, 0x1EC84, 200.0),
    (0x1EC85, 0x1EC85, 300.0),
    (0x1EC86, 0x1EC86, 400.0),
    (0x1EC87, 0x1EC87, 500.0),
    (0x1EC88, 0x1EC88, 600.0),
    (0x1EC89, 0x1EC89, 700.0),
    (0x1EC8A, 0x1EC8A, 800.0),
    (0x1EC8B, 0x1EC8B, 900.0),
    (0x1EC8C, 0x1EC8C, 1000.0),
    (0x1EC8D, 0x1EC8D, 2000.0),
    (0x1EC8E, 0x1EC8E, 3000.0),
    (0x1EC8F, 0x1EC8F, 4000.0),
    (0x1EC90, 0x1EC90, 5000.0),
    (0x1EC91, 0x1EC91, 6000.0),
    (0x1EC92, 0x1EC92, 7000.0),
    (0x1EC93, 0x1EC93, 8000.0),
    (0x1EC94, 0x1EC94, 9000.0),
    (0x1EC95, 0x1EC95, 10000.0),
    (0x1EC96, 0x1EC96, 20000.0),
    (0x1EC97, 0x1EC97, 30000.0),
    (0x1EC98, 0x1EC98, 40000.0),
    (0x1EC99, 0x1EC99, 50000.0),
    (0x1EC9A, 0x1EC9A, 60000.0),
    (0x1EC9B, 0x1EC9B, 70000.0),
    (0x1EC9C, 0x1EC9C, 80000.0),
    (0x1EC9D, 0x1EC9D, 90000.0),
    (0x1EC9E, 0x1EC9E, 100000.0),
    (0x1EC9F, 0x1EC9F, 200000.0),
    (0x1ECA0, 0x1ECA0, 100000.0),
    (0x1ECA1, 0x1ECA1, 10000000.0),
    (0x1ECA2, 0x1ECA2, 20000000.0),
    (0x1ECA3, 0x1ECAB, 1.0),
    (0x1ECAD, 0x1ECAD, 1.0 / 4.0),
    (0x1ECAE, 0x1ECAE, 1.0 / 2.0),
    (0x1ECAF, 0x1ECAF, 3.0 / 4.0),
    (0x1ECB1, 0x1ECB2, 1.0),
    (0x1ECB3, 0x1ECB3, 10000.0),
    (0x1ECB4, 0x1ECB4, 100000.0),
    (0x1ED01, 0x1ED0A, 1.0),
    (0x1ED0B, 0x1ED0B, 20.0),
    (0x1ED0C, 0x1ED0C, 30.0),
    (0x1ED0D, 0x1ED0D, 40.0),
    (0x1ED0E, 0x1ED0E, 50.0),
    (0x1ED0F, 0x1ED0F, 60.0),
    (0x1ED10, 0x1ED10, 70.0),
    (0x1ED11, 0x1ED11, 80.0),
    (0x1ED12, 0x1ED12, 90.0),
    (0x1ED13, 0x1ED13, 100.0),
    (0x1ED14, 0x1ED14, 200.0),
    (0x1ED15, 0x1ED15, 300.0),
    (0x1ED16, 0x1ED16, 400.0),
    (0x1ED17, 0x1ED17, 500.0),
    (0x1ED18, 0x1ED18, 600.0),
    (0x1ED19, 0x1ED19, 700.0),
    (0x1ED1A, 0x1ED1A, 800.0),
    (0x1ED1B, 0x1ED1B, 900.0),
    (0x1ED1C, 0x1ED1C, 1000.0),
    (0x1ED1D, 0x1ED1D, 2000.0),
    (0x1ED1E, 0x1ED1E, 3000.0),
    (0x1ED1F, 0x1ED1F, 4000.0),
    (0x1ED20, 0x1ED20, 5000.0),
    (0x1ED21, 0x1ED21, 6000.0),
    (0x1ED22, 0x1ED22, 7000.0),
    (0x1ED23, 0x1ED23, 8000.0),
    (0x1ED24, 0x1ED24, 9000.0),
    (0x1ED25, 0x1ED25, 10000.0),
    (0x1ED26, 0x1ED26, 20000.0),
    (0x1ED27, 0x1ED27, 30000.0),
    (0x1ED28, 0x1ED28, 40000.0),
    (0x1ED29, 0x1ED29, 50000.0),
    (0x1ED2A, 0x1ED2A, 60000.0),
    (0x1ED2B, 0x1ED2B, 70000.0),
    (0x1ED2C, 0x1ED2C, 80000.0),
    (0x1ED2D, 0x1ED2D, 90000.0),
    (0x1ED2F, 0x1ED37, 2.0),
    (0x1ED38, 0x1ED38, 400.0),
    (0x1ED39, 0x1ED39, 600.0),
    (0x1ED3A, 0x1ED3A, 2000.0),
    (0x1ED3B, 0x1ED3B, 10000.0),
    (0x1ED3C, 0x1ED3C, 1.0 / 2.0),
    (0x1ED3D, 0x1ED3D, 1.0 / 6.0),
    (0x1F100, 0x1F100, 0.0),
    (0x1F101, 0x1F10A, 0.0),
    (0x1F10B, 0x1F10B, 0.0),
    (0x1F10C, 0x1F10C, 0.0),
    (0x1FBF0, 0x1FBF9, 0.0),
];
