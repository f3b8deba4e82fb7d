/*!
# Tokens

Each line is read left to right. At every position the longest known
pattern wins, so `A->` is the letter A followed by the store arrow and
never the letter A followed by a minus and a greater-than. Keywords are
case sensitive and some carry their trailing space or parenthesis.

| Pattern | Bytes | | Pattern | Bytes |
|---|---|---|---|---|
| `ClrHome` | `E1` | | `Str0` | `AA 00` |
| `ClrDraw` | `85` | | `Str1` | `AA 01` |
| `GridOff` | `74` | | `Str2` | `AA 02` |
| `AxesOff` | `63` | | `Pic1` | `60 00` |
| `RecallPic ` | `62` | | `max(` | `B9` |
| `Lbl ` | `D6` | | `->` | `04` |
| `Goto ` | `D7` | | `+` `-` `*` `/` | `70` `71` `82` `83` |
| `Menu(` | `E6` | | `=` `<` `>` | `6A` `6B` `6C` |
| `If ` | `CE` | | `:` | `3F` |
| `Then` | `CF` | | `~` | `B0` |
| `End` | `D4` | | `"` | `2A` |
| `Repeat ` | `D3` | | `,` | `2B` |
| `Stop` | `D9` | | `(` `)` | `10` `11` |
| `Pause` | `D8` | | `{` `}` | `08` `09` |
| `Disp ` | `DE` | | space | `29` |
| `Output(` | `E7` | | `A->` .. `Z->` | `41 04` .. `5A 04` |
| `Input ` | `DC` | | `A` .. `Z` | `41` .. `5A` |
| `Prompt ` | `DD` | | `0` .. `9` | `30` .. `39` |
| `Send(` | `E5` | | | |
| `Get(` | `E2` | | | |
| `getKey` | `AD` | | | |

A character no pattern covers falls back by class: a lower case letter
is the same token as its upper case form, and anything else is dropped.
Every line that is not blank ends with `3F`.

```text
Disp "HI"      DE 2A 48 49 2A 3F
5->a           35 04 41 3F
#              3F
```

*/
