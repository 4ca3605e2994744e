// декодирование UTF-8 конечным автоматом: байт за байтом, без ошибок - некорректные последовательности
// заменяются на U+FFFD (замена максимальной части некорректной последовательности, см. Unicode, 3.9)

/// заменяющий символ
pub const REPLACEMENT: u32 = 0xFFFD;

/// последовательность завершена (или ещё не начата)
pub const ACCEPT: u8 = 0;
/// некорректная последовательность
pub const REJECT: u8 = 1;
/// ожидается 1 байт продолжения
const TAIL_1: u8 = 2;
/// ожидается 2 байта продолжения
const TAIL_2: u8 = 3;
/// ожидается 3 байта продолжения
const TAIL_3: u8 = 4;
/// после E0: A0 ..= BF (иначе - overlong)
const E0_SECOND: u8 = 5;
/// после ED: 80 ..= 9F (иначе - суррогаты)
const ED_SECOND: u8 = 6;
/// после F0: 90 ..= BF (иначе - overlong)
const F0_SECOND: u8 = 7;
/// после F4: 80 ..= 8F (иначе - больше U+10FFFF)
const F4_SECOND: u8 = 8;

// классы байт

const ASCII: u8 = 0;
/// 80 ..= 8F
const CONT_80: u8 = 1;
/// 90 ..= 9F
const CONT_90: u8 = 2;
/// A0 ..= BF
const CONT_A0: u8 = 3;
/// C0, C1, F5 ..= FF
const INVALID: u8 = 4;
/// C2 ..= DF
const LEAD_2: u8 = 5;
const LEAD_E0: u8 = 6;
/// E1 ..= EC, EE, EF
const LEAD_3: u8 = 7;
const LEAD_ED: u8 = 8;
const LEAD_F0: u8 = 9;
/// F1 ..= F3
const LEAD_4: u8 = 10;
const LEAD_F4: u8 = 11;

const R: u8 = REJECT;

/// переходы: [состояние][класс байта]
#[rustfmt::skip]
const TRANSITIONS: [[u8; 12]; 9] = [
    //  ASCII   80      90      A0      INV  C2..DF  E0         E1..EF  ED         F0         F1..F3  F4
    [ACCEPT, R,      R,      R,      R,   TAIL_1, E0_SECOND, TAIL_2, ED_SECOND, F0_SECOND, TAIL_3, F4_SECOND], // ACCEPT
    [R,      R,      R,      R,      R,   R,      R,         R,      R,         R,         R,      R],         // REJECT
    [R,      ACCEPT, ACCEPT, ACCEPT, R,   R,      R,         R,      R,         R,         R,      R],         // TAIL_1
    [R,      TAIL_1, TAIL_1, TAIL_1, R,   R,      R,         R,      R,         R,         R,      R],         // TAIL_2
    [R,      TAIL_2, TAIL_2, TAIL_2, R,   R,      R,         R,      R,         R,         R,      R],         // TAIL_3
    [R,      R,      R,      TAIL_1, R,   R,      R,         R,      R,         R,         R,      R],         // E0_SECOND
    [R,      TAIL_1, TAIL_1, R,      R,   R,      R,         R,      R,         R,         R,      R],         // ED_SECOND
    [R,      R,      TAIL_2, TAIL_2, R,   R,      R,         R,      R,         R,         R,      R],         // F0_SECOND
    [R,      TAIL_2, R,      R,      R,   R,      R,         R,      R,         R,         R,      R],         // F4_SECOND
];

/// биты значения в первом байте последовательности, по классу байта
const LEAD_MASKS: [u8; 12] = [0x7F, 0, 0, 0, 0, 0x1F, 0x0F, 0x0F, 0x0F, 0x07, 0x07, 0x07];

/// маска, исключащая 2 старших бита в 2, 3, 4 байтах последовательности UTF-8
const CONT_MASK: u8 = 0x3F;

/// классы всех байт
const CLASSES: [u8; 256] = byte_classes();

const fn byte_classes() -> [u8; 256]
{
    let mut classes = [INVALID; 256];
    let mut byte = 0;

    while byte < 256 {
        classes[byte] = match byte as u8 {
            0x00 ..= 0x7F => ASCII,
            0x80 ..= 0x8F => CONT_80,
            0x90 ..= 0x9F => CONT_90,
            0xA0 ..= 0xBF => CONT_A0,
            0xC2 ..= 0xDF => LEAD_2,
            0xE0 => LEAD_E0,
            0xE1 ..= 0xEC | 0xEE ..= 0xEF => LEAD_3,
            0xED => LEAD_ED,
            0xF0 => LEAD_F0,
            0xF1 ..= 0xF3 => LEAD_4,
            0xF4 => LEAD_F4,
            _ => INVALID,
        };
        byte += 1;
    }

    classes
}

/// один шаг автомата: (состояние, накопленное значение, байт) -> (состояние, накопленное значение).
/// если новое состояние - ACCEPT, накопленное значение - готовый кодпоинт
#[inline(always)]
pub fn step(state: u8, code: u32, byte: u8) -> (u8, u32)
{
    let class = CLASSES[byte as usize];

    let code = match state {
        ACCEPT => (byte & LEAD_MASKS[class as usize]) as u32,
        _ => (code << 6) | (byte & CONT_MASK) as u32,
    };

    (TRANSITIONS[state as usize][class as usize], code)
}

/// декодировать байты в кодпоинты. буфер результата очищается и переиспользуется
pub fn decode_into(input: &[u8], result: &mut Vec<u32>)
{
    result.clear();
    result.reserve(input.len());

    let mut state = ACCEPT;
    let mut code = 0;
    let mut i = 0;

    while i < input.len() {
        let byte = input[i];

        if state == ACCEPT && byte < 0x80 {
            result.push(byte as u32);
            i += 1;
            continue;
        }

        let (next, value) = step(state, code, byte);

        match next {
            ACCEPT => {
                result.push(value);
                i += 1;
            }
            REJECT => {
                result.push(REPLACEMENT);

                // байт, прервавший последовательность, может начинать новую - разберём его ещё раз
                if state == ACCEPT {
                    i += 1;
                }
            }
            _ => {
                code = value;
                i += 1;
            }
        }

        state = match next {
            REJECT => ACCEPT,
            next => next,
        };
    }

    // обрезанная последовательность в конце
    if state != ACCEPT {
        result.push(REPLACEMENT);
    }
}
