//! LED number to register table for the three-matrix board
//!
//! Entry `n - 1` holds the registers of logical LED `n`. The last two
//! entries are the physical LEDs the legacy numbering calls 329 and 330.

use super::leds::MatrixLocation::{self, *};
use super::leds::LedRegisters;

/// Number of entries in [`LED_TABLE`]
pub const LED_COUNT: usize = 326;

const fn rec(red: u8, green: u8, blue: u8, location: MatrixLocation) -> LedRegisters {
    LedRegisters {
        red,
        green,
        blue,
        location,
    }
}

#[rustfmt::skip]
pub static LED_TABLE: [LedRegisters; LED_COUNT] = [
    // matrix 1
    rec(0x8D, 0x8F, 0x8E, Mat1Page1), // 1
    rec(0x96, 0x98, 0x97, Mat1Page1), // 2
    rec(0x9F, 0xA1, 0xA0, Mat1Page1), // 3
    rec(0xA8, 0xAA, 0xA9, Mat1Page1), // 4
    rec(0x84, 0x86, 0x85, Mat1Page1), // 5
    rec(0x7B, 0x7D, 0x7C, Mat1Page1), // 6
    rec(0x72, 0x74, 0x73, Mat1Page1), // 7
    rec(0x69, 0x6B, 0x6A, Mat1Page1), // 8
    rec(0x60, 0x62, 0x61, Mat1Page1), // 9
    rec(0x8A, 0x8C, 0x8B, Mat1Page1), // 10
    rec(0x93, 0x95, 0x94, Mat1Page1), // 11
    rec(0x9C, 0x9E, 0x9D, Mat1Page1), // 12
    rec(0xA5, 0xA7, 0xA6, Mat1Page1), // 13
    rec(0x81, 0x83, 0x82, Mat1Page1), // 14
    rec(0x78, 0x7A, 0x79, Mat1Page1), // 15
    rec(0x6F, 0x71, 0x70, Mat1Page1), // 16
    rec(0x66, 0x68, 0x67, Mat1Page1), // 17
    rec(0x5D, 0x5F, 0x5E, Mat1Page1), // 18
    rec(0x87, 0x88, 0x89, Mat1Page1), // 19
    rec(0x90, 0x91, 0x92, Mat1Page1), // 20
    rec(0x99, 0x9A, 0x9B, Mat1Page1), // 21
    rec(0xA2, 0xA3, 0xA4, Mat1Page1), // 22
    rec(0x7E, 0x7F, 0x80, Mat1Page1), // 23
    rec(0x75, 0x76, 0x77, Mat1Page1), // 24
    rec(0x6C, 0x6D, 0x6E, Mat1Page1), // 25
    rec(0x63, 0x64, 0x65, Mat1Page1), // 26
    rec(0x5A, 0x5B, 0x5C, Mat1Page1), // 27
    rec(0xB1, 0xB2, 0xB3, Mat1Page0), // 28
    rec(0x1B, 0x1C, 0x1D, Mat1Page1), // 29
    rec(0x39, 0x3A, 0x3B, Mat1Page1), // 30
    rec(0x57, 0x58, 0x59, Mat1Page1), // 31
    rec(0x93, 0x94, 0x95, Mat1Page0), // 32
    rec(0x75, 0x76, 0x77, Mat1Page0), // 33
    rec(0x57, 0x58, 0x59, Mat1Page0), // 34
    rec(0x39, 0x3A, 0x3B, Mat1Page0), // 35
    rec(0x1B, 0x1C, 0x1D, Mat1Page0), // 36
    rec(0xAE, 0xAF, 0xB0, Mat1Page0), // 37
    rec(0x18, 0x19, 0x1A, Mat1Page1), // 38
    rec(0x36, 0x37, 0x38, Mat1Page1), // 39
    rec(0x54, 0x55, 0x56, Mat1Page1), // 40
    rec(0x90, 0x91, 0x92, Mat1Page0), // 41
    rec(0x72, 0x73, 0x74, Mat1Page0), // 42
    rec(0x54, 0x55, 0x56, Mat1Page0), // 43
    rec(0x36, 0x37, 0x38, Mat1Page0), // 44
    rec(0x18, 0x19, 0x1A, Mat1Page0), // 45
    rec(0xAB, 0xAC, 0xAD, Mat1Page0), // 46
    rec(0x15, 0x16, 0x17, Mat1Page1), // 47
    rec(0x33, 0x34, 0x35, Mat1Page1), // 48
    rec(0x51, 0x52, 0x53, Mat1Page1), // 49
    rec(0x8D, 0x8E, 0x8F, Mat1Page0), // 50
    rec(0x6F, 0x70, 0x71, Mat1Page0), // 51
    rec(0x51, 0x52, 0x53, Mat1Page0), // 52
    rec(0x33, 0x34, 0x35, Mat1Page0), // 53
    rec(0x15, 0x16, 0x17, Mat1Page0), // 54
    rec(0xA8, 0xAA, 0xA9, Mat1Page0), // 55
    rec(0x12, 0x14, 0x13, Mat1Page1), // 56
    rec(0x30, 0x32, 0x31, Mat1Page1), // 57
    rec(0x4E, 0x50, 0x4F, Mat1Page1), // 58
    rec(0x8A, 0x8C, 0x8B, Mat1Page0), // 59
    rec(0x6C, 0x6E, 0x6D, Mat1Page0), // 60
    rec(0x4E, 0x50, 0x4F, Mat1Page0), // 61
    rec(0x30, 0x32, 0x31, Mat1Page0), // 62
    rec(0x12, 0x14, 0x13, Mat1Page0), // 63
    rec(0xA2, 0xA3, 0xA4, Mat1Page0), // 64
    rec(0x0C, 0x0D, 0x0E, Mat1Page1), // 65
    rec(0x2A, 0x2B, 0x2C, Mat1Page1), // 66
    rec(0x48, 0x49, 0x4A, Mat1Page1), // 67
    rec(0x84, 0x85, 0x86, Mat1Page0), // 68
    rec(0x66, 0x67, 0x68, Mat1Page0), // 69
    rec(0x48, 0x49, 0x4A, Mat1Page0), // 70
    rec(0x2A, 0x2B, 0x2C, Mat1Page0), // 71
    rec(0x0C, 0x0D, 0x0E, Mat1Page0), // 72
    rec(0xA5, 0xA6, 0xA7, Mat1Page0), // 73
    rec(0x0F, 0x10, 0x11, Mat1Page1), // 74
    rec(0x2D, 0x2E, 0x2F, Mat1Page1), // 75
    rec(0x4B, 0x4C, 0x4D, Mat1Page1), // 76
    rec(0x87, 0x88, 0x89, Mat1Page0), // 77
    rec(0x69, 0x6A, 0x6B, Mat1Page0), // 78
    rec(0x4B, 0x4C, 0x4D, Mat1Page0), // 79
    rec(0x2D, 0x2E, 0x2F, Mat1Page0), // 80
    rec(0x0F, 0x10, 0x11, Mat1Page0), // 81
    rec(0x99, 0x9A, 0x9B, Mat1Page0), // 82
    rec(0x03, 0x04, 0x05, Mat1Page1), // 83
    rec(0x21, 0x22, 0x23, Mat1Page1), // 84
    rec(0x3F, 0x40, 0x41, Mat1Page1), // 85
    rec(0x7B, 0x7C, 0x7D, Mat1Page0), // 86
    rec(0x5D, 0x5E, 0x5F, Mat1Page0), // 87
    rec(0x3F, 0x40, 0x41, Mat1Page0), // 88
    rec(0x21, 0x22, 0x23, Mat1Page0), // 89
    rec(0x03, 0x04, 0x05, Mat1Page0), // 90
    rec(0x9C, 0x9D, 0x9E, Mat1Page0), // 91
    rec(0x06, 0x07, 0x08, Mat1Page1), // 92
    rec(0x24, 0x25, 0x26, Mat1Page1), // 93
    rec(0x42, 0x43, 0x44, Mat1Page1), // 94
    rec(0x7E, 0x7F, 0x80, Mat1Page0), // 95
    rec(0x60, 0x61, 0x62, Mat1Page0), // 96
    rec(0x42, 0x43, 0x44, Mat1Page0), // 97
    rec(0x24, 0x25, 0x26, Mat1Page0), // 98
    rec(0x06, 0x07, 0x08, Mat1Page0), // 99
    rec(0x9F, 0xA0, 0xA1, Mat1Page0), // 100
    rec(0x09, 0x0A, 0x0B, Mat1Page1), // 101
    rec(0x27, 0x28, 0x29, Mat1Page1), // 102
    rec(0x45, 0x46, 0x47, Mat1Page1), // 103
    rec(0x81, 0x82, 0x83, Mat1Page0), // 104
    rec(0x63, 0x64, 0x65, Mat1Page0), // 105
    rec(0x45, 0x46, 0x47, Mat1Page0), // 106
    rec(0x27, 0x28, 0x29, Mat1Page0), // 107
    rec(0x09, 0x0A, 0x0B, Mat1Page0), // 108
    rec(0x96, 0x97, 0x98, Mat1Page0), // 109
    rec(0x00, 0x01, 0x02, Mat1Page1), // 110
    rec(0x1E, 0x1F, 0x20, Mat1Page1), // 111
    rec(0x3C, 0x3D, 0x3E, Mat1Page1), // 112
    rec(0x78, 0x79, 0x7A, Mat1Page0), // 113
    rec(0x5A, 0x5B, 0x5C, Mat1Page0), // 114
    rec(0x3C, 0x3D, 0x3E, Mat1Page0), // 115
    rec(0x1E, 0x1F, 0x20, Mat1Page0), // 116
    rec(0x00, 0x01, 0x02, Mat1Page0), // 117
    // matrix 2
    rec(0xA2, 0xA3, 0xA4, Mat2Page1), // 118
    rec(0x87, 0x88, 0x89, Mat2Page1), // 119
    rec(0x7E, 0x7F, 0x80, Mat2Page1), // 120
    rec(0x75, 0x76, 0x77, Mat2Page1), // 121
    rec(0x6C, 0x6D, 0x6E, Mat2Page1), // 122
    rec(0x63, 0x64, 0x65, Mat2Page1), // 123
    rec(0x5A, 0x5B, 0x5C, Mat2Page1), // 124
    rec(0x90, 0x91, 0x92, Mat2Page1), // 125
    rec(0x99, 0x9A, 0x9B, Mat2Page1), // 126
    rec(0x51, 0x52, 0x53, Mat2Page1), // 127
    rec(0xAB, 0xAC, 0xAD, Mat2Page0), // 128
    rec(0x8D, 0x8E, 0x8F, Mat2Page0), // 129
    rec(0x6F, 0x70, 0x71, Mat2Page0), // 130
    rec(0x51, 0x52, 0x53, Mat2Page0), // 131
    rec(0x33, 0x34, 0x35, Mat2Page0), // 132
    rec(0x15, 0x16, 0x17, Mat2Page0), // 133
    rec(0x15, 0x16, 0x17, Mat2Page1), // 134
    rec(0x33, 0x34, 0x35, Mat2Page1), // 135
    rec(0x57, 0x58, 0x59, Mat2Page1), // 136
    rec(0xB1, 0xB2, 0xB3, Mat2Page0), // 137
    rec(0x93, 0x94, 0x95, Mat2Page0), // 138
    rec(0x75, 0x76, 0x77, Mat2Page0), // 139
    rec(0x57, 0x58, 0x59, Mat2Page0), // 140
    rec(0x39, 0x3A, 0x3B, Mat2Page0), // 141
    rec(0x1B, 0x1C, 0x1D, Mat2Page0), // 142
    rec(0x1B, 0x1C, 0x1D, Mat2Page1), // 143
    rec(0x39, 0x3A, 0x3B, Mat2Page1), // 144
    rec(0xA8, 0xA9, 0xAA, Mat2Page1), // 145
    rec(0x8D, 0x8E, 0x8F, Mat2Page1), // 146
    rec(0x84, 0x85, 0x86, Mat2Page1), // 147
    rec(0x7B, 0x7C, 0x7D, Mat2Page1), // 148
    rec(0x72, 0x73, 0x74, Mat2Page1), // 149
    rec(0x69, 0x6A, 0x6B, Mat2Page1), // 150
    rec(0x60, 0x61, 0x62, Mat2Page1), // 151
    rec(0x96, 0x97, 0x98, Mat2Page1), // 152
    rec(0x9F, 0xA0, 0xA1, Mat2Page1), // 153
    rec(0xA5, 0xA6, 0xA7, Mat2Page1), // 154
    rec(0x8A, 0x8B, 0x8C, Mat2Page1), // 155
    rec(0x81, 0x82, 0x83, Mat2Page1), // 156
    rec(0x78, 0x79, 0x7A, Mat2Page1), // 157
    rec(0x6F, 0x70, 0x71, Mat2Page1), // 158
    rec(0x66, 0x67, 0x68, Mat2Page1), // 159
    rec(0x5D, 0x5E, 0x5F, Mat2Page1), // 160
    rec(0x93, 0x94, 0x95, Mat2Page1), // 161
    rec(0x9C, 0x9D, 0x9E, Mat2Page1), // 162
    rec(0x54, 0x55, 0x56, Mat2Page1), // 163
    rec(0xAE, 0xAF, 0xB0, Mat2Page0), // 164
    rec(0x90, 0x91, 0x92, Mat2Page0), // 165
    rec(0x72, 0x73, 0x74, Mat2Page0), // 166
    rec(0x54, 0x55, 0x56, Mat2Page0), // 167
    rec(0x36, 0x37, 0x38, Mat2Page0), // 168
    rec(0x18, 0x19, 0x1A, Mat2Page0), // 169
    rec(0x18, 0x19, 0x1A, Mat2Page1), // 170
    rec(0x36, 0x37, 0x38, Mat2Page1), // 171
    rec(0x4E, 0x4F, 0x50, Mat2Page1), // 172
    rec(0xA8, 0xA9, 0xAA, Mat2Page0), // 173
    rec(0x8A, 0x8B, 0x8C, Mat2Page0), // 174
    rec(0x6C, 0x6D, 0x6E, Mat2Page0), // 175
    rec(0x4E, 0x4F, 0x50, Mat2Page0), // 176
    rec(0x30, 0x31, 0x32, Mat2Page0), // 177
    rec(0x12, 0x13, 0x14, Mat2Page0), // 178
    rec(0x12, 0x13, 0x14, Mat2Page1), // 179
    rec(0x30, 0x31, 0x32, Mat2Page1), // 180
    rec(0x4B, 0x4C, 0x4D, Mat2Page1), // 181
    rec(0xA5, 0xA6, 0xA7, Mat2Page0), // 182
    rec(0x87, 0x88, 0x89, Mat2Page0), // 183
    rec(0x69, 0x6A, 0x6B, Mat2Page0), // 184
    rec(0x4B, 0x4C, 0x4D, Mat2Page0), // 185
    rec(0x2D, 0x2E, 0x2F, Mat2Page0), // 186
    rec(0x0F, 0x10, 0x11, Mat2Page0), // 187
    rec(0x0F, 0x10, 0x11, Mat2Page1), // 188
    rec(0x2D, 0x2E, 0x2F, Mat2Page1), // 189
    rec(0x45, 0x46, 0x47, Mat2Page1), // 190
    rec(0x9F, 0xA0, 0xA1, Mat2Page0), // 191
    rec(0x81, 0x82, 0x83, Mat2Page0), // 192
    rec(0x63, 0x64, 0x65, Mat2Page0), // 193
    rec(0x45, 0x46, 0x47, Mat2Page0), // 194
    rec(0x27, 0x28, 0x29, Mat2Page0), // 195
    rec(0x09, 0x0A, 0x0B, Mat2Page0), // 196
    rec(0x09, 0x0A, 0x0B, Mat2Page1), // 197
    rec(0x27, 0x28, 0x29, Mat2Page1), // 198
    rec(0x3F, 0x40, 0x41, Mat2Page1), // 199
    rec(0x99, 0x9A, 0x9B, Mat2Page0), // 200
    rec(0x7B, 0x7C, 0x7D, Mat2Page0), // 201
    rec(0x5D, 0x5E, 0x5F, Mat2Page0), // 202
    rec(0x3F, 0x40, 0x41, Mat2Page0), // 203
    rec(0x21, 0x22, 0x23, Mat2Page0), // 204
    rec(0x03, 0x04, 0x05, Mat2Page0), // 205
    rec(0x03, 0x04, 0x05, Mat2Page1), // 206
    rec(0x21, 0x22, 0x23, Mat2Page1), // 207
    rec(0x48, 0x49, 0x4A, Mat2Page1), // 208
    rec(0xA2, 0xA3, 0xA4, Mat2Page0), // 209
    rec(0x84, 0x85, 0x86, Mat2Page0), // 210
    rec(0x66, 0x67, 0x68, Mat2Page0), // 211
    rec(0x48, 0x49, 0x4A, Mat2Page0), // 212
    rec(0x2A, 0x2B, 0x2C, Mat2Page0), // 213
    rec(0x0C, 0x0D, 0x0E, Mat2Page0), // 214
    rec(0x0C, 0x0D, 0x0E, Mat2Page1), // 215
    rec(0x2A, 0x2B, 0x2C, Mat2Page1), // 216
    rec(0x44, 0x42, 0x43, Mat2Page1), // 217
    rec(0x9E, 0x9C, 0x9D, Mat2Page0), // 218
    rec(0x80, 0x7E, 0x7F, Mat2Page0), // 219
    rec(0x62, 0x60, 0x61, Mat2Page0), // 220
    rec(0x44, 0x42, 0x43, Mat2Page0), // 221
    rec(0x26, 0x24, 0x25, Mat2Page0), // 222
    rec(0x08, 0x06, 0x07, Mat2Page0), // 223
    rec(0x08, 0x06, 0x07, Mat2Page1), // 224
    rec(0x26, 0x24, 0x25, Mat2Page1), // 225
    rec(0x3C, 0x3D, 0x3E, Mat2Page1), // 226
    rec(0x96, 0x97, 0x98, Mat2Page0), // 227
    rec(0x78, 0x79, 0x7A, Mat2Page0), // 228
    rec(0x5A, 0x5B, 0x5C, Mat2Page0), // 229
    rec(0x3C, 0x3D, 0x3E, Mat2Page0), // 230
    rec(0x1E, 0x1F, 0x20, Mat2Page0), // 231
    rec(0x00, 0x01, 0x02, Mat2Page0), // 232
    rec(0x00, 0x01, 0x02, Mat2Page1), // 233
    rec(0x1E, 0x1F, 0x20, Mat2Page1), // 234
    // matrix 3
    rec(0x3E, 0x3D, 0x3C, Mat3Page1), // 235
    rec(0x02, 0x01, 0x00, Mat3Page0), // 236
    rec(0x20, 0x1F, 0x1E, Mat3Page0), // 237
    rec(0x3E, 0x3D, 0x3C, Mat3Page0), // 238
    rec(0x5C, 0x5B, 0x5A, Mat3Page0), // 239
    rec(0x7A, 0x79, 0x78, Mat3Page0), // 240
    rec(0x98, 0x97, 0x96, Mat3Page0), // 241
    rec(0x02, 0x01, 0x00, Mat3Page1), // 242
    rec(0x20, 0x1F, 0x1E, Mat3Page1), // 243
    rec(0x41, 0x40, 0x3F, Mat3Page1), // 244
    rec(0x05, 0x04, 0x03, Mat3Page0), // 245
    rec(0x23, 0x22, 0x21, Mat3Page0), // 246
    rec(0x41, 0x40, 0x3F, Mat3Page0), // 247
    rec(0x5F, 0x5E, 0x5D, Mat3Page0), // 248
    rec(0x7D, 0x7C, 0x7B, Mat3Page0), // 249
    rec(0x9B, 0x9A, 0x99, Mat3Page0), // 250
    rec(0x05, 0x04, 0x03, Mat3Page1), // 251
    rec(0x23, 0x22, 0x21, Mat3Page1), // 252
    rec(0x44, 0x43, 0x42, Mat3Page1), // 253
    rec(0x08, 0x07, 0x06, Mat3Page0), // 254
    rec(0x26, 0x25, 0x24, Mat3Page0), // 255
    rec(0x44, 0x43, 0x42, Mat3Page0), // 256
    rec(0x62, 0x61, 0x60, Mat3Page0), // 257
    rec(0x80, 0x7F, 0x7E, Mat3Page0), // 258
    rec(0x9E, 0x9D, 0x9C, Mat3Page0), // 259
    rec(0x08, 0x07, 0x06, Mat3Page1), // 260
    rec(0x26, 0x25, 0x24, Mat3Page1), // 261
    rec(0x47, 0x46, 0x45, Mat3Page1), // 262
    rec(0x0B, 0x0A, 0x09, Mat3Page0), // 263
    rec(0x29, 0x28, 0x27, Mat3Page0), // 264
    rec(0x47, 0x46, 0x45, Mat3Page0), // 265
    rec(0x65, 0x64, 0x63, Mat3Page0), // 266
    rec(0x83, 0x82, 0x81, Mat3Page0), // 267
    rec(0xA1, 0xA0, 0x9F, Mat3Page0), // 268
    rec(0x0B, 0x0A, 0x09, Mat3Page1), // 269
    rec(0x29, 0x28, 0x27, Mat3Page1), // 270
    rec(0x4A, 0x49, 0x48, Mat3Page1), // 271
    rec(0x0E, 0x0D, 0x0C, Mat3Page0), // 272
    rec(0x2C, 0x2B, 0x2A, Mat3Page0), // 273
    rec(0x4A, 0x49, 0x48, Mat3Page0), // 274
    rec(0x68, 0x67, 0x66, Mat3Page0), // 275
    rec(0x86, 0x85, 0x84, Mat3Page0), // 276
    rec(0xA4, 0xA3, 0xA2, Mat3Page0), // 277
    rec(0x0E, 0x0D, 0x0C, Mat3Page1), // 278
    rec(0x2C, 0x2B, 0x2A, Mat3Page1), // 279
    rec(0x50, 0x4F, 0x4E, Mat3Page1), // 280
    rec(0x14, 0x13, 0x12, Mat3Page0), // 281
    rec(0x32, 0x31, 0x30, Mat3Page0), // 282
    rec(0x50, 0x4F, 0x4E, Mat3Page0), // 283
    rec(0x6E, 0x6D, 0x6C, Mat3Page0), // 284
    rec(0x8C, 0x8B, 0x8A, Mat3Page0), // 285
    rec(0xAA, 0xA9, 0xA8, Mat3Page0), // 286
    rec(0x14, 0x13, 0x12, Mat3Page1), // 287
    rec(0x32, 0x31, 0x30, Mat3Page1), // 288
    rec(0x53, 0x52, 0x51, Mat3Page1), // 289
    rec(0x17, 0x16, 0x15, Mat3Page0), // 290
    rec(0x35, 0x34, 0x33, Mat3Page0), // 291
    rec(0x53, 0x52, 0x51, Mat3Page0), // 292
    rec(0x71, 0x70, 0x6F, Mat3Page0), // 293
    rec(0x8F, 0x8E, 0x8D, Mat3Page0), // 294
    rec(0xAD, 0xAC, 0xAB, Mat3Page0), // 295
    rec(0x17, 0x16, 0x15, Mat3Page1), // 296
    rec(0x35, 0x34, 0x33, Mat3Page1), // 297
    rec(0x4D, 0x4C, 0x4B, Mat3Page1), // 298
    rec(0x11, 0x10, 0x0F, Mat3Page0), // 299
    rec(0x2F, 0x2E, 0x2D, Mat3Page0), // 300
    rec(0x4D, 0x4C, 0x4B, Mat3Page0), // 301
    rec(0x6B, 0x6A, 0x69, Mat3Page0), // 302
    rec(0x89, 0x88, 0x87, Mat3Page0), // 303
    rec(0xA7, 0xA6, 0xA5, Mat3Page0), // 304
    rec(0x11, 0x10, 0x0F, Mat3Page1), // 305
    rec(0x2F, 0x2E, 0x2D, Mat3Page1), // 306
    rec(0xA4, 0xA3, 0xA2, Mat3Page1), // 307
    rec(0x5C, 0x5B, 0x5A, Mat3Page1), // 308
    rec(0x65, 0x64, 0x63, Mat3Page1), // 309
    rec(0x6E, 0x6D, 0x6C, Mat3Page1), // 310
    rec(0x77, 0x76, 0x75, Mat3Page1), // 311
    rec(0x80, 0x7F, 0x7E, Mat3Page1), // 312
    rec(0x89, 0x88, 0x87, Mat3Page1), // 313
    rec(0x92, 0x91, 0x90, Mat3Page1), // 314
    rec(0x9B, 0x9A, 0x99, Mat3Page1), // 315
    rec(0x57, 0x58, 0x59, Mat3Page1), // 316
    rec(0x1B, 0x1C, 0x1D, Mat3Page0), // 317
    rec(0x39, 0x3A, 0x3B, Mat3Page0), // 318
    rec(0x57, 0x58, 0x59, Mat3Page0), // 319
    rec(0x75, 0x76, 0x77, Mat3Page0), // 320
    rec(0x93, 0x94, 0x95, Mat3Page0), // 321
    rec(0xB1, 0xB2, 0xB3, Mat3Page0), // 322
    rec(0x1B, 0x1C, 0x1D, Mat3Page1), // 323
    rec(0x39, 0x3A, 0x3B, Mat3Page1), // 324
    rec(0x74, 0x73, 0x72, Mat3Page0), // 325, also addressed as 329
    rec(0x92, 0x91, 0x90, Mat3Page0), // 326, also addressed as 330
];
