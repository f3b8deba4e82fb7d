/*!
# Introduction

A launcher program is written as plain text, one statement per line,
the way it appears on the calculator screen. The compiler reads the
text, tokenizes it, builds the program file and writes a C header.

```text
ClrHome
Lbl A
Menu("LAUNCHER","CHAT",B,"QUIT",Q)
Lbl Q
Stop
```

The header holds two declarations:

```text
unsigned int __launcher_var_len = 117;
unsigned char __launcher_var[] = {
    0x2A, 0x2A, 0x54, 0x49, 0x38, 0x33, 0x46, 0x2A, ...
};
```

## Encoders

When Python and the `tivars` package are installed, `--encoder auto`
hands the source to `tivars` and the header holds its calc-data:
the token length word and the tokens, with no file around them.
Otherwise the built-in tokenizer runs and the header holds a complete
program file. `--encoder manual` always uses the built-in tokenizer.

## Logging

Set `TIBASIC_LOG` to `debug` to see sizes and the checksum, or `trace`
to see every character the tokenizer drops.

*/
