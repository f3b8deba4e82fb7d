/*!
# File Format

All multi-byte numbers are little endian. `n` is the token count.

| Offset | Size | Contents |
|---|---|---|
| 0 | 8 | `**TI83F*` |
| 8 | 3 | `1A 0A 00` |
| 11 | 42 | comment, zero filled |
| 53 | 2 | zero |
| 55 | 2 | `n + 19` |
| 57 | 2 | `n + 2` |
| 59 | 1 | `05`, program |
| 60 | 8 | name, upper case, zero filled |
| 68 | 1 | version, `00` |
| 69 | 1 | archived, `00` |
| 70 | 2 | `n + 2` |
| 72 | 2 | `n` |
| 74 | n | tokens |
| 74 + n | 2 | checksum |

The checksum is the sum of the bytes from offset 55 up to the checksum,
kept to 16 bits. Names longer than eight characters are cut short.

*/
